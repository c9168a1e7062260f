use super::ValueValidator;
use crate::types::Field;

impl ValueValidator<String> for Field {
    fn validate(&self, value: &String) -> Result<(), String> {
        Field::validate(*self, value).into_result()
    }
}
