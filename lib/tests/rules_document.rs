use std::io::Write;
use cdnrules::check;
use cdnrules::config::{self, Config};
use cdnrules::types::{Diagnostic, Field};
use cdnrules::validate;

fn write_document(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn valid_document() {
    let file = write_document("
delivery-rules:
  - name: cacheImages
    cache-expiration:
      duration: '7.00:00:00'
  - name: redirectLegacy
    url-redirect:
      path: /new
      query-string: a=b&&c=d
      fragment: top
  - name: rewriteAssets
    url-rewrite:
      source-pattern: /assets/
      destination: /static/assets/
");
    let cfg = config::file::new(file.path()).unwrap();
    assert_eq!(cfg.count(&["delivery-rules"]), 3);
    assert_eq!(check::check_rules(&cfg), Ok(vec![]));
}

#[test]
fn invalid_document() {
    let long_destination = "/".to_owned() + &"d".repeat(260);
    let file = write_document(&format!("
delivery-rules:
  - name: Rule_1
    url-redirect:
      query-string: a=b&c
  - name: rule2
    url-rewrite:
      destination: {long_destination}
"));
    let cfg = config::file::new(file.path()).unwrap();
    let diags = check::check_rules(&cfg).unwrap();
    assert_eq!(diags, vec![
        Diagnostic {
            rule: 0,
            field: Field::Name,
            message: validate::DELIVERY_RULE_NAME_MESSAGE.to_owned(),
        },
        Diagnostic {
            rule: 0,
            field: Field::UrlRedirectQueryString,
            message: validate::URL_REDIRECT_QUERY_STRING_FORMAT_MESSAGE
                .to_owned(),
        },
        Diagnostic {
            rule: 1,
            field: Field::UrlRewriteDestination,
            message: validate::URL_REWRITE_DESTINATION_MESSAGE.to_owned(),
        },
    ]);
    assert_eq!(diags[2].to_string(), format!(
        "delivery-rules[1].url-rewrite.destination: {}",
        validate::URL_REWRITE_DESTINATION_MESSAGE));
}

#[test]
fn unquoted_null_name() {
    let file = write_document("
delivery-rules:
  - name: 'Null'
  - name: Null
");
    let cfg = config::file::new(file.path()).unwrap();
    assert_eq!(check::check_rule(&cfg, 0), Ok(vec![]));
    let err = check::check_rules(&cfg).unwrap_err();
    assert_eq!(err, "value at delivery-rules.1.name must be a quoted string, \
                     read as \"\"");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = config::file::new(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.starts_with("error opening file"), "{err}");
}

#[test]
fn concurrent_checks_agree() {
    let values = ["a=b", "?a=b", "a=b&c", "a=b&&c=d", ""];
    let expected: Vec<_> = values.iter()
        .map(|v| validate::url_redirect_query_string(v))
        .collect();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || {
            values.iter()
                .map(|v| validate::url_redirect_query_string(v))
                .collect::<Vec<_>>()
        }))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
