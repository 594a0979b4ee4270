use chrono::{DateTime, Utc};
use shaku::Interface;

pub trait Clock: Interface {
    fn now(&self) -> DateTime<Utc>;
}
