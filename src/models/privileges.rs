use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq)]
    pub struct Privileges: i32 {
        const None = 0;
        const CanLogin = 1 << 0;
        const Staff = 1 << 1;
    }
}

impl Privileges {
    pub fn can_login(&self) -> bool {
        self.contains(Privileges::CanLogin)
    }

    pub fn is_staff(&self) -> bool {
        self.contains(Privileges::Staff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        let privileges = Privileges::CanLogin | Privileges::Staff;
        let restored = Privileges::from_bits_retain(privileges.bits());
        assert_eq!(restored, privileges);
        assert!(restored.can_login());
        assert!(restored.is_staff());
    }

    #[test]
    fn tenant_defaults_are_not_staff() {
        let privileges = Privileges::CanLogin;
        assert!(privileges.can_login());
        assert!(!privileges.is_staff());
    }
}
