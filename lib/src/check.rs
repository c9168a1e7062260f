//! Checking delivery rule documents.

use strum::IntoEnumIterator;
use crate::config::{self, parse, Config, ValueRef, ValueValidator};
use crate::configrefs;
use crate::types::{Diagnostic, Field};
use crate::validate::ValidationResult;

/// Check a single value for a field.
pub fn check_value(field: Field, value: &str) -> ValidationResult {
    let result = field.validate(value);
    log::trace!("{field} {value:?}: {result:?}");
    result
}

/// Check the fields present in the rule at position `rule`, in [`Field`]
/// order.  Absent fields are not checked.
///
/// Fails when a field is not a string in the document, since its text may
/// not be what was written.
pub fn check_rule<C>(config: &C, rule: usize)
-> Result<Vec<Diagnostic>, String>
where
    C: Config + ?Sized,
{
    let index = rule.to_string();
    let mut diags = Vec::new();
    for field in Field::iter() {
        let names = configrefs::rule_field(&index, field);
        if config.find_string(&names)?.is_none() {
            continue;
        }
        let validators: [&dyn ValueValidator<String>; 1] = [&field];
        let vref = ValueRef {
            names: &names,
            def: "",
            type_: &parse::STRING,
            validators: &validators,
        };
        if let Err(message) = config::get_ref(config, &vref) {
            log::debug!("rule {rule}: invalid {field}: {message}");
            diags.push(Diagnostic { rule, field, message });
        }
    }
    Ok(diags)
}

/// Check every delivery rule in a document, in order.
pub fn check_rules<C>(config: &C) -> Result<Vec<Diagnostic>, String>
where
    C: Config + ?Sized,
{
    let count = config.count(configrefs::DELIVERY_RULES);
    if count == 0 {
        log::warn!("no delivery rules found");
    }
    let mut diags = Vec::new();
    for rule in 0..count {
        diags.extend(check_rule(config, rule)?);
    }
    Ok(diags)
}
