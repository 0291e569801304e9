//! JSON token streams
//!
//! The decoder consumes JSON as a forward-only sequence of [`Token`]s pulled
//! from a [`TokenSource`], so it can sit on top of an incremental parser as
//! well as an already parsed value tree.

use serde_json::map::Iter as MapIter;
use serde_json::{Map, Value};

use super::errors::GeoJsonResult;

/// One structural or scalar JSON event
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    /// Member name inside an object
    Key(String),
    String(String),
    /// Number in its original textual form
    Number(String),
    Bool(bool),
    Null,
}

/// A forward-only cursor over JSON tokens
///
/// `Ok(None)` marks the end of input. A token is never returned twice.
pub trait TokenSource {
    fn next_token(&mut self) -> GeoJsonResult<Option<Token>>;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> GeoJsonResult<Option<Token>> {
        (**self).next_token()
    }
}

/// Replays a fixed list of tokens
#[derive(Debug, Clone, Default)]
pub struct VecTokenSource {
    tokens: std::vec::IntoIter<Token>,
}

impl VecTokenSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenSource { tokens: tokens.into_iter() }
    }
}

impl TokenSource for VecTokenSource {
    fn next_token(&mut self) -> GeoJsonResult<Option<Token>> {
        Ok(self.tokens.next())
    }
}

enum Pending<'a> {
    Value(&'a Value),
    Object(&'a Map<String, Value>),
}

enum Frame<'a> {
    Object(MapIter<'a>),
    Array(std::slice::Iter<'a, Value>),
}

/// Walks a parsed [`Value`] tree, yielding the tokens a parser would have
pub struct ValueTokenSource<'a> {
    pending: Option<Pending<'a>>,
    stack: Vec<Frame<'a>>,
}

impl<'a> ValueTokenSource<'a> {
    pub fn new(value: &'a Value) -> Self {
        ValueTokenSource {
            pending: Some(Pending::Value(value)),
            stack: Vec::new(),
        }
    }

    pub fn from_map(map: &'a Map<String, Value>) -> Self {
        ValueTokenSource {
            pending: Some(Pending::Object(map)),
            stack: Vec::new(),
        }
    }

    fn open(&mut self, value: &'a Value) -> Token {
        match value {
            Value::Object(map) => self.open_object(map),
            Value::Array(items) => {
                self.stack.push(Frame::Array(items.iter()));
                Token::ArrayStart
            },
            Value::String(s) => Token::String(s.clone()),
            Value::Number(n) => Token::Number(n.to_string()),
            Value::Bool(b) => Token::Bool(*b),
            Value::Null => Token::Null,
        }
    }

    fn open_object(&mut self, map: &'a Map<String, Value>) -> Token {
        self.stack.push(Frame::Object(map.iter()));
        Token::ObjectStart
    }
}

impl<'a> TokenSource for ValueTokenSource<'a> {
    fn next_token(&mut self) -> GeoJsonResult<Option<Token>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(match pending {
                Pending::Value(value) => self.open(value),
                Pending::Object(map) => self.open_object(map),
            }));
        }

        let token = match self.stack.last_mut() {
            None => return Ok(None),
            Some(Frame::Object(members)) => match members.next() {
                Some((key, value)) => {
                    self.pending = Some(Pending::Value(value));
                    Token::Key(key.clone())
                },
                None => {
                    self.stack.pop();
                    Token::ObjectEnd
                },
            },
            Some(Frame::Array(items)) => match items.next() {
                Some(value) => self.open(value),
                None => {
                    self.stack.pop();
                    Token::ArrayEnd
                },
            },
        };
        Ok(Some(token))
    }
}
