//! 记录字段校验
//!
//! 三个字段各自对应一个固定的正则，不可配置。

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Record, RecordField};

/// 一个或多个单词，每个单词为大写字母开头、后跟至少两个字母
const NAME_PATTERN: &str = r"^[A-Z][a-zA-Z]{2,}( [A-Z][a-zA-Z]{2,})*$";

/// 一个或两个单词，单词形状同姓名
const STATE_PATTERN: &str = r"^[A-Z][a-zA-Z]{2,}( [A-Z][a-zA-Z]{2,})?$";

/// `(212) 555 - 1234`，区号与局号首位不能为 0
const PHONE_PATTERN: &str = r"^\([1-9][0-9]{2}\) [1-9][0-9]{2} - [0-9]{4}$";

static NAME_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(NAME_PATTERN).ok());
static STATE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(STATE_PATTERN).ok());
static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(PHONE_PATTERN).ok());

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_valid_name(name: &str) -> bool {
    matches(&NAME_RE, name)
}

pub fn is_valid_state(state: &str) -> bool {
    matches(&STATE_RE, state)
}

pub fn is_valid_phone(phone: &str) -> bool {
    matches(&PHONE_RE, phone)
}

/// 校验单个字段
pub fn is_valid_field(field: RecordField, value: &str) -> bool {
    match field {
        RecordField::Name => is_valid_name(value),
        RecordField::State => is_valid_state(value),
        RecordField::Phone => is_valid_phone(value),
    }
}

/// 按 姓名 → 州 → 电话 的顺序校验，返回第一个不合法的字段
pub fn validate_record(record: &Record) -> Result<(), RecordField> {
    RecordField::ALL
        .into_iter()
        .find(|field| !is_valid_field(*field, record.field(*field)))
        .map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_capitalized_names() {
        for name in ["John", "John Smith", "Mary Ann McDonald", "JOHN", "Abc Def Ghi"] {
            assert!(is_valid_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_names() {
        for name in [
            "",
            "john Smith",
            "Jo Smith",
            "John3 Smith",
            "John  Smith",
            " John",
            "John ",
            "John-Smith",
            "O'Neil",
        ] {
            assert!(!is_valid_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn state_allows_one_or_two_words() {
        assert!(is_valid_state("Texas"));
        assert!(is_valid_state("New York"));
        assert!(!is_valid_state("New York City"));
        assert!(!is_valid_state("new York"));
        assert!(!is_valid_state("NY"));
        assert!(!is_valid_state(""));
    }

    #[test]
    fn phone_requires_exact_shape() {
        assert!(is_valid_phone("(212) 555 - 1234"));
        assert!(is_valid_phone("(999) 100 - 0000"));

        for phone in [
            "(012) 555 - 1234",
            "(212) 055 - 1234",
            "(212)555-1234",
            "(212) 555-1234",
            "(212)  555 - 1234",
            "212 555 - 1234",
            "(212) 555 - 123",
            "(212) 555 - 12345",
            "(21a) 555 - 1234",
        ] {
            assert!(!is_valid_phone(phone), "{phone:?} should be invalid");
        }
    }

    #[test]
    fn validate_record_reports_first_bad_field() {
        let valid = Record::new("John Smith", "New York", "(212) 555 - 1234");
        assert_eq!(validate_record(&valid), Ok(()));

        let bad_everything = Record::new("john", "ny", "555");
        assert_eq!(validate_record(&bad_everything), Err(RecordField::Name));

        let bad_state_and_phone = Record::new("John", "ny", "555");
        assert_eq!(validate_record(&bad_state_and_phone), Err(RecordField::State));

        let bad_phone = Record::new("John", "Ohio", "555");
        assert_eq!(validate_record(&bad_phone), Err(RecordField::Phone));
    }
}
