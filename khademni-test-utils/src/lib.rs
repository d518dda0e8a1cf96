pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;
pub mod transport;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;
pub use transport::RecordingTransport;

pub mod prelude {
    pub use crate::{
        fixtures::{auth::factory as auth_factory, job::factory as job_factory},
        RecordingTransport, TestBuilder, TestError, TestSetup,
    };
}
