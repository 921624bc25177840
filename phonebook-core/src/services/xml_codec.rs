//! Phonebook XML document codec
//!
//! ```xml
//! <records>
//!   <record>
//!     <name>John Smith</name>
//!     <state>New York</state>
//!     <phone>(212) 555 - 1234</phone>
//!   </record>
//! </records>
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{CoreError, CoreResult};
use crate::types::{Record, RecordField};

const ROOT_TAG: &str = "records";
const RECORD_TAG: &str = "record";
const INDENT_SIZE: usize = 2;

/// Parse a whole phonebook document.
///
/// Comments, processing instructions, whitespace and unknown elements are
/// skipped. A missing or foreign root element, a `record` without one of its
/// three fields, invalid UTF-8 or any XML well-formedness error is a
/// [`CoreError::Parse`].
pub fn parse_document(bytes: &[u8]) -> CoreResult<Vec<Record>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CoreError::Parse(format!("document is not valid UTF-8: {e}")))?;
    let mut reader = Reader::from_str(text);
    let mut records = Vec::new();
    let mut seen_root = false;

    loop {
        match next_event(&mut reader)? {
            Event::Start(e) => {
                check_root(&e, seen_root)?;
                seen_root = true;
                parse_records(&mut reader, &mut records)?;
            }
            Event::Empty(e) => {
                check_root(&e, seen_root)?;
                seen_root = true;
            }
            Event::Text(t) => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(CoreError::Parse(
                        "text content outside the root element".to_string(),
                    ));
                }
            }
            Event::CData(_) | Event::End(_) => {
                return Err(CoreError::Parse(
                    "unexpected content outside the root element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(CoreError::Parse(format!("missing <{ROOT_TAG}> root element")));
    }

    log::debug!("Parsed {} records", records.len());
    Ok(records)
}

/// Serialize `records` into a complete XML document (declaration included).
pub fn serialize_document(records: &[Record]) -> CoreResult<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_event(&mut writer, Event::Start(BytesStart::new(ROOT_TAG)))?;
    for record in records {
        write_event(&mut writer, Event::Start(BytesStart::new(RECORD_TAG)))?;
        for field in RecordField::ALL {
            write_event(&mut writer, Event::Start(BytesStart::new(field.tag())))?;
            write_event(&mut writer, Event::Text(BytesText::new(record.field(field))))?;
            write_event(&mut writer, Event::End(BytesEnd::new(field.tag())))?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new(RECORD_TAG)))?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new(ROOT_TAG)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> CoreResult<()> {
    writer
        .write_event(event)
        .map_err(|e| CoreError::Serialization(e.to_string()))
}

fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> CoreResult<Event<'a>> {
    reader.read_event().map_err(|e| {
        CoreError::Parse(format!(
            "XML error at byte {}: {e}",
            reader.buffer_position()
        ))
    })
}

fn check_root(start: &BytesStart<'_>, seen_root: bool) -> CoreResult<()> {
    if seen_root {
        return Err(CoreError::Parse("multiple root elements".to_string()));
    }
    if start.name().as_ref() != ROOT_TAG.as_bytes() {
        return Err(CoreError::Parse(format!(
            "unexpected root element <{}>, expected <{ROOT_TAG}>",
            String::from_utf8_lossy(start.name().as_ref())
        )));
    }
    Ok(())
}

/// Read the children of `<records>` up to its end tag.
fn parse_records(reader: &mut Reader<&[u8]>, records: &mut Vec<Record>) -> CoreResult<()> {
    loop {
        match next_event(reader)? {
            Event::Start(e) if e.name().as_ref() == RECORD_TAG.as_bytes() => {
                let record = parse_record(reader, records.len())?;
                records.push(record);
            }
            Event::Empty(e) if e.name().as_ref() == RECORD_TAG.as_bytes() => {
                return Err(missing_field(records.len(), RecordField::Name));
            }
            Event::Start(_) => skip_element(reader)?,
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(CoreError::Parse(format!(
                    "document ended inside <{ROOT_TAG}>"
                )));
            }
            _ => {}
        }
    }
}

/// Read one `<record>` element; `position` is only used in error messages.
fn parse_record(reader: &mut Reader<&[u8]>, position: usize) -> CoreResult<Record> {
    let mut fields: [Option<String>; 3] = [None, None, None];

    loop {
        match next_event(reader)? {
            Event::Start(e) => match field_for_tag(e.name().as_ref()) {
                Some(index) => {
                    let value = read_text(reader)?;
                    // 与 DOM 的 item(0) 一致：重复字段只取第一个
                    fields[index].get_or_insert(value);
                }
                None => skip_element(reader)?,
            },
            Event::Empty(e) => {
                if let Some(index) = field_for_tag(e.name().as_ref()) {
                    fields[index].get_or_insert_with(String::new);
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(CoreError::Parse(format!(
                    "document ended inside <{RECORD_TAG}>"
                )));
            }
            _ => {}
        }
    }

    let [name, state, phone] = fields;
    Ok(Record {
        name: name.ok_or_else(|| missing_field(position, RecordField::Name))?,
        state: state.ok_or_else(|| missing_field(position, RecordField::State))?,
        phone: phone.ok_or_else(|| missing_field(position, RecordField::Phone))?,
    })
}

fn field_for_tag(tag: &[u8]) -> Option<usize> {
    RecordField::ALL
        .iter()
        .position(|field| field.tag().as_bytes() == tag)
}

fn missing_field(position: usize, field: RecordField) -> CoreError {
    CoreError::Parse(format!(
        "<{RECORD_TAG}> #{} is missing <{}>",
        position + 1,
        field.tag()
    ))
}

/// Concatenated text content of the current element, consuming its end tag.
fn read_text(reader: &mut Reader<&[u8]>) -> CoreResult<String> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match next_event(reader)? {
            Event::Text(t) => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| CoreError::Parse(format!("invalid text content: {e}")))?;
                text.push_str(&unescaped);
            }
            Event::CData(c) => {
                let raw = String::from_utf8(c.into_inner().into_owned())
                    .map_err(|e| CoreError::Parse(format!("invalid CDATA content: {e}")))?;
                text.push_str(&raw);
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(text),
            Event::End(_) => depth -= 1,
            Event::Eof => {
                return Err(CoreError::Parse("document ended inside a field".to_string()));
            }
            _ => {}
        }
    }
}

/// Skip the current element and everything below it.
fn skip_element(reader: &mut Reader<&[u8]>) -> CoreResult<()> {
    let mut depth = 0usize;

    loop {
        match next_event(reader)? {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(()),
            Event::End(_) => depth -= 1,
            Event::Eof => {
                return Err(CoreError::Parse(
                    "document ended inside an element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("John Smith", "New York", "(212) 555 - 1234"),
            Record::new("Mary Ann", "Texas", "(713) 200 - 0001"),
        ]
    }

    #[test]
    fn serialize_then_parse_preserves_records() {
        let records = sample();
        let bytes = serialize_document(&records).unwrap();
        assert_eq!(parse_document(&bytes).unwrap(), records);
    }

    #[test]
    fn serialized_layout_is_indented() {
        let bytes = serialize_document(&sample()[..1]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("\n  <record>\n    <name>John Smith</name>\n"));
        assert!(text.contains("<phone>(212) 555 - 1234</phone>"));
        assert!(text.trim_end().ends_with("</records>"));
    }

    #[test]
    fn empty_phonebook_round_trips() {
        let bytes = serialize_document(&[]).unwrap();
        assert!(parse_document(&bytes).unwrap().is_empty());
        assert!(parse_document(b"<records/>").unwrap().is_empty());
    }

    #[test]
    fn special_characters_are_escaped() {
        let records = vec![Record::new("A & <B>", "\"Quoted\" 'State'", "")];
        let bytes = serialize_document(&records).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("A &amp; &lt;B&gt;"));
        assert_eq!(parse_document(&bytes).unwrap(), records);
    }

    #[test]
    fn skips_comments_whitespace_and_unknown_elements() {
        let doc = br#"<?xml version="1.0"?>
<!-- exported phonebook -->
<records>
  <meta><owner>someone</owner></meta>
  <record>
    <!-- primary -->
    <name>John Smith</name>
    <nickname>Johnny</nickname>
    <state>New York</state>
    <phone>(212) 555 - 1234</phone>
  </record>
</records>
"#;
        let records = parse_document(doc).unwrap();
        assert_eq!(records, sample()[..1].to_vec());
    }

    #[test]
    fn field_text_includes_cdata_and_entities() {
        let doc = b"<records><record><name><![CDATA[Ann]]> Lee</name>\
<state>Rhode &amp; Island</state><phone>(401) 555 - 0000</phone></record></records>";
        let records = parse_document(doc).unwrap();
        assert_eq!(records[0].name, "Ann Lee");
        assert_eq!(records[0].state, "Rhode & Island");
    }

    #[test]
    fn record_missing_field_is_rejected() {
        let doc = b"<records><record><name>John</name><state>Ohio</state></record></records>";
        let err = parse_document(doc).unwrap_err();
        assert_eq!(
            err,
            CoreError::Parse("<record> #1 is missing <phone>".to_string())
        );
    }

    #[test]
    fn malformed_documents_are_rejected() {
        let cases: [&[u8]; 8] = [
            b"",
            b"   ",
            b"<?xml version=\"1.0\"?>",
            b"<contacts></contacts>",
            b"<records><record>",
            b"<records></record>",
            b"<records/><records/>",
            b"not xml at all",
        ];
        for doc in cases {
            assert!(
                matches!(parse_document(doc), Err(CoreError::Parse(_))),
                "{:?} should fail",
                String::from_utf8_lossy(doc)
            );
        }
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = parse_document(&[0x3c, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, CoreError::Parse(msg) if msg.contains("UTF-8")));
    }
}
