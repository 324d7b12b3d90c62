pub mod applications;
pub mod conversations;
pub mod documents;
pub mod incidents;
pub mod leases;
pub mod loyalty;
pub mod messages;
pub mod payments;
pub mod privileges;
pub mod properties;
pub mod sessions;
pub mod users;
