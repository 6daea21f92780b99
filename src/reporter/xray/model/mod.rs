pub mod evidence;
pub mod results;
pub mod test_info;
pub mod test_result;

pub use self::evidence::XrayEvidenceItem;
pub use self::results::{XrayTestExecutionInfo, XrayTestExecutionResults};
pub use self::test_info::{XrayManualTestStep, XrayTestInfo};
pub use self::test_result::XrayTest;
