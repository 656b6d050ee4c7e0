use pipeline::Validatable;
use pipeline::ValidationError;

use crate::proto::chat::CreateRoomRequest;

impl Validatable for CreateRoomRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.participant_id <= 0 {
            return Err(ValidationError::new("participant_id must be positive"));
        }
        Ok(())
    }
}
