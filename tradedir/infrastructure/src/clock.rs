use chrono::{DateTime, Utc};
use shaku::Component;
use tradedir_application::Clock;

#[derive(Component)]
#[shaku(interface = Clock)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
