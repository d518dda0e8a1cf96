pub mod factory;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn job<'a>(&'a mut self) -> JobFixtures<'a> {
        JobFixtures { setup: self }
    }
}

pub struct JobFixtures<'a> {
    setup: &'a mut TestSetup,
}
