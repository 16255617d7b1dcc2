// Wall clock seam used for the "last updated" stamp
use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Clock;
    use chrono::{DateTime, Local, TimeZone};

    pub struct FixedClock(pub DateTime<Local>);

    impl FixedClock {
        pub fn at(hour: u32, minute: u32) -> Self {
            let time = Local
                .with_ymd_and_hms(2024, 3, 14, hour, minute, 0)
                .earliest()
                .expect("valid local time");
            Self(time)
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }
}
