use crate::types::Field;

/// Section holding the sequence of delivery rules.
pub const DELIVERY_RULES: &[&str] = &["delivery-rules"];

/// Path of a field of the rule at `index` (the rule's position, as a string).
pub fn rule_field<'a>(index: &'a str, field: Field) -> Vec<&'a str> {
    let mut names: Vec<&'a str> = DELIVERY_RULES.to_vec();
    names.push(index);
    names.extend_from_slice(field.names());
    names
}
