//! Streaming decode on top of serde_json
//!
//! serde_json's deserializer walks the document forward-only and calls back
//! into a [`TokenFeeder`], which turns every event into a [`Token`] for the
//! [`GeometryStateMachine`]. The document is never held in memory as a
//! whole, and its grammar is checked by serde_json.

use std::fmt;
use std::io::{BufReader, Read};

use log::debug;
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde_json::Deserializer;

use super::decoder::GeometryStateMachine;
use super::errors::{GeoJsonError, GeoJsonResult};
use super::token::Token;
use crate::geometry::Geometry;

// With `arbitrary_precision`, serde_json hands a number over as a one-entry
// map under this key, holding the number's original text
const RAW_NUMBER_KEY: &str = "$serde_json::private::Number";

/// State machine plus the first error it raised
///
/// serde only carries string errors back out of a visitor, so the typed
/// error is kept here and returned in place of serde_json's.
struct Driver {
    machine: GeometryStateMachine,
    failure: Option<GeoJsonError>,
}

impl Driver {
    fn feed<E: de::Error>(&mut self, token: Token) -> Result<(), E> {
        self.machine.feed(token).map_err(|e| {
            let message = e.to_string();
            if self.failure.is_none() {
                self.failure = Some(e);
            }
            E::custom(message)
        })
    }
}

/// Seed and visitor that forward one JSON value, recursively, as tokens
struct TokenFeeder<'d> {
    driver: &'d mut Driver,
}

impl<'de, 'd> DeserializeSeed<'de> for TokenFeeder<'d> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de, 'd> Visitor<'de> for TokenFeeder<'d> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<(), E> {
        self.driver.feed(Token::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<(), E> {
        self.driver.feed(Token::Number(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<(), E> {
        self.driver.feed(Token::Number(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<(), E> {
        self.driver.feed(Token::Number(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<(), E> {
        self.driver.feed(Token::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<(), E> {
        self.driver.feed(Token::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        self.driver.feed(Token::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        self.driver.feed(Token::ArrayStart)?;
        while seq.next_element_seed(TokenFeeder { driver: &mut *self.driver })?.is_some() {}
        self.driver.feed(Token::ArrayEnd)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let first = match map.next_key::<String>()? {
            Some(key) => key,
            None => {
                self.driver.feed(Token::ObjectStart)?;
                return self.driver.feed(Token::ObjectEnd);
            },
        };
        if first == RAW_NUMBER_KEY {
            let text: String = map.next_value()?;
            return self.driver.feed(Token::Number(text));
        }

        self.driver.feed(Token::ObjectStart)?;
        self.driver.feed(Token::Key(first))?;
        map.next_value_seed(TokenFeeder { driver: &mut *self.driver })?;
        while let Some(key) = map.next_key::<String>()? {
            self.driver.feed(Token::Key(key))?;
            map.next_value_seed(TokenFeeder { driver: &mut *self.driver })?;
        }
        self.driver.feed(Token::ObjectEnd)
    }
}

/// Decode one geometry object by streaming it from a reader
///
/// Only whitespace may follow the root object.
pub fn decode_geometry_stream<R: Read>(reader: R) -> GeoJsonResult<Geometry> {
    let mut driver = Driver {
        machine: GeometryStateMachine::new(),
        failure: None,
    };
    let mut deserializer = Deserializer::from_reader(BufReader::new(reader));

    let parsed = TokenFeeder { driver: &mut driver }
        .deserialize(&mut deserializer)
        .and_then(|_| deserializer.end());

    if let Some(failure) = driver.failure.take() {
        return Err(failure);
    }
    parsed.map_err(json_error)?;
    driver.machine.finish()
}

fn json_error(error: serde_json::Error) -> GeoJsonError {
    debug!("JSON stream rejected: {}", error);
    if error.is_io() {
        GeoJsonError::JsonError(error)
    } else if error.is_eof() {
        GeoJsonError::DecodeError(format!("token stream ended mid-object ({})", error))
    } else {
        GeoJsonError::DecodeError(format!("invalid JSON: {}", error))
    }
}
