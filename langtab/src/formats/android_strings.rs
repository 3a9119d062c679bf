//! Support for the Android `strings.xml` resource format.
//!
//! Only singular `<string>` elements are handled; `<plurals>`, string arrays,
//! and `<string>` elements without a `name` attribute are skipped. Entries
//! keep document order, which is what defines the output order of every
//! generated locale file.
//!
//! Self-closing `<string/>` entries parse with an empty value and CDATA text
//! is read as-is. A document containing no element at all is rejected.

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser};

/// An Android string resource document: the ordered `<string>` entries of
/// one `strings.xml` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub strings: Vec<StringResource>,
}

/// A single `<string name="...">text</string>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    pub name: String,
    pub value: String,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut strings = Vec::new();
        let mut saw_element = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    saw_element = true;
                    if e.name().as_ref() == b"string" {
                        if let Some(sr) = parse_string_resource(e, &mut xml_reader)? {
                            strings.push(sr);
                        }
                    }
                }
                // A self-closing <string/> is an entry with an empty value.
                Ok(Event::Empty(ref e)) => {
                    saw_element = true;
                    if e.name().as_ref() == b"string" {
                        if let Some(name) = name_attribute(e)? {
                            strings.push(StringResource {
                                name,
                                value: String::new(),
                            });
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        if !saw_element {
            return Err(Error::InvalidResource("no root element found".to_string()));
        }
        Ok(Format { strings })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(writer, b' ', 4);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

        for sr in &self.strings {
            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));

            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(BytesText::new(&sr.value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(())
    }
}

fn name_attribute(e: &BytesStart) -> Result<Option<String>, Error> {
    let mut name = None;
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            name = Some(attr.unescape_value()?.to_string());
        }
    }
    Ok(name)
}

fn parse_string_resource<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<Option<StringResource>, Error> {
    let name = name_attribute(e)?;

    let mut buf = Vec::new();
    // Read until text or end
    let value = loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let v = e.unescape().map_err(Error::XmlParse)?;
                break v.trim().to_string();
            }
            Ok(Event::CData(e)) => {
                let v = String::from_utf8(e.into_inner().into_owned())
                    .map_err(|e| Error::InvalidResource(e.to_string()))?;
                break v.trim().to_string();
            }
            Ok(Event::End(_)) => break String::new(),
            Ok(Event::Eof) => return Err(Error::InvalidResource("Unexpected EOF".to_string())),
            Ok(_) => (),
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    };

    // A <string> without a name attribute is not a resource entry.
    Ok(name.map(|name| StringResource { name, value }))
}
