//! GeoJSON to geometry decoding
//!
//! Every entry point (a parsed [`Value`] tree, a [`TokenSource`] cursor and
//! a streaming reader) feeds the same [`GeometryStateMachine`]. The machine keeps
//! one frame per geometry object currently open, so members of a
//! `GeometryCollection` are fully consumed before their next sibling starts.
//!
//! Transitions, per frame:
//!
//! | state              | token                         | next state            |
//! |--------------------|-------------------------------|-----------------------|
//! | `AwaitObject`      | `{`                           | `AwaitKey`            |
//! | `AwaitKey`         | key `type`/`coordinates`/`geometries`/other | `AwaitValue(member)` |
//! | `AwaitKey`         | `}`                           | `Done` (frame built)  |
//! | `AwaitValue(Type)` | string                        | `AwaitKey`            |
//! | `AwaitValue(Coordinates)` | `[`                    | `InCoordinates(1)`    |
//! | `AwaitValue(Geometries)`  | `[`                    | `InGeometries`        |
//! | `AwaitValue(Other)`| scalar / `[` / `{`            | `AwaitKey` / `Skipping(1)` |
//! | `InCoordinates(d)` | `[` / number / `]`            | `InCoordinates(d+1)` / same / `InCoordinates(d-1)`, `AwaitKey` at 0 |
//! | `InGeometries`     | `{` / `]`                     | child frame / `AwaitKey` |
//! | `Skipping(d)`      | `[`,`{` / `]`,`}` / other     | `Skipping(d±1)`, `AwaitKey` at 0 |

use std::io::Read;

use log::debug;
use serde_json::{Map, Value};

use super::errors::{GeoJsonError, GeoJsonResult};
use super::sequence::{parse_ordinate, CoordinateTree};
use super::stream::decode_geometry_stream;
use super::token::{Token, TokenSource, ValueTokenSource};
use crate::geometry::{
    Coordinate, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Member whose value is expected next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
    Type,
    Coordinates,
    Geometries,
    Other,
}

/// Decoder state for the innermost open geometry object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Before the opening brace of the root object
    AwaitObject,
    /// Inside an object, expecting a member name or `}`
    AwaitKey,
    /// After a member name
    AwaitValue(Member),
    /// Inside the `coordinates` arrays, at the given nesting depth
    InCoordinates(usize),
    /// Inside the `geometries` array, between members
    InGeometries,
    /// Inside an ignored member value, at the given nesting depth
    Skipping(usize),
    /// Root object closed and decoded
    Done,
}

#[derive(Debug)]
struct Frame {
    state: State,
    type_name: Option<String>,
    coordinates: Option<CoordinateTree>,
    geometries: Option<Vec<Geometry>>,
    open_arrays: Vec<Vec<CoordinateTree>>,
}

impl Frame {
    fn new() -> Self {
        Frame {
            state: State::AwaitKey,
            type_name: None,
            coordinates: None,
            geometries: None,
            open_arrays: Vec::new(),
        }
    }
}

/// Push-driven geometry decoder
///
/// Feed tokens with [`feed`](Self::feed) until [`is_done`](Self::is_done);
/// then take the result with [`finish`](Self::finish).
#[derive(Debug)]
pub struct GeometryStateMachine {
    frames: Vec<Frame>,
    result: Option<Geometry>,
}

impl Default for GeometryStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryStateMachine {
    pub fn new() -> Self {
        GeometryStateMachine {
            frames: Vec::new(),
            result: None,
        }
    }

    /// Current state of the innermost open object
    pub fn state(&self) -> State {
        match self.frames.last() {
            Some(frame) => frame.state,
            None if self.result.is_some() => State::Done,
            None => State::AwaitObject,
        }
    }

    /// Number of geometry objects currently open
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_done(&self) -> bool {
        self.state() == State::Done
    }

    /// Advance the machine by one token
    pub fn feed(&mut self, token: Token) -> GeoJsonResult<()> {
        match self.state() {
            State::AwaitObject => match token {
                Token::ObjectStart => {
                    self.frames.push(Frame::new());
                    Ok(())
                },
                other => Err(unexpected(&other, "a geometry object")),
            },
            State::Done => Err(GeoJsonError::DecodeError(
                "unexpected token after the end of the geometry".to_string(),
            )),
            State::AwaitKey => self.on_key(token),
            State::AwaitValue(member) => self.on_value(member, token),
            State::InCoordinates(depth) => self.on_coordinates(depth, token),
            State::InGeometries => self.on_geometries(token),
            State::Skipping(depth) => {
                let next = match token {
                    Token::ObjectStart | Token::ArrayStart => State::Skipping(depth + 1),
                    Token::ObjectEnd | Token::ArrayEnd if depth == 1 => State::AwaitKey,
                    Token::ObjectEnd | Token::ArrayEnd => State::Skipping(depth - 1),
                    _ => State::Skipping(depth),
                };
                self.set_state(next);
                Ok(())
            },
        }
    }

    /// Take the decoded geometry once the root object is closed
    pub fn finish(self) -> GeoJsonResult<Geometry> {
        self.result.ok_or_else(|| {
            GeoJsonError::DecodeError("token stream ended mid-object".to_string())
        })
    }

    fn frame(&mut self) -> &mut Frame {
        // Only called from states that imply an open frame
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn set_state(&mut self, state: State) {
        self.frame().state = state;
    }

    fn on_key(&mut self, token: Token) -> GeoJsonResult<()> {
        match token {
            Token::Key(key) => {
                let member = match key.as_str() {
                    "type" => Member::Type,
                    "coordinates" => Member::Coordinates,
                    "geometries" => Member::Geometries,
                    _ => Member::Other,
                };
                self.set_state(State::AwaitValue(member));
                Ok(())
            },
            Token::ObjectEnd => self.close_object(),
            other => Err(unexpected(&other, "a member name")),
        }
    }

    fn on_value(&mut self, member: Member, token: Token) -> GeoJsonResult<()> {
        let frame = self.frame();
        match (member, token) {
            (Member::Type, Token::String(name)) => {
                frame.type_name = Some(name);
                frame.state = State::AwaitKey;
            },
            (Member::Type, other) => return Err(unexpected(&other, "a string for 'type'")),
            (Member::Coordinates, Token::ArrayStart) => {
                frame.open_arrays.clear();
                frame.open_arrays.push(Vec::new());
                frame.state = State::InCoordinates(1);
            },
            (Member::Coordinates, other) => return Err(unexpected(&other, "an array for 'coordinates'")),
            (Member::Geometries, Token::ArrayStart) => {
                frame.geometries = Some(Vec::new());
                frame.state = State::InGeometries;
            },
            (Member::Geometries, other) => return Err(unexpected(&other, "an array for 'geometries'")),
            (Member::Other, Token::ObjectStart | Token::ArrayStart) => {
                frame.state = State::Skipping(1);
            },
            (Member::Other, Token::ObjectEnd | Token::ArrayEnd | Token::Key(_)) => {
                return Err(GeoJsonError::DecodeError("member without a value".to_string()));
            },
            (Member::Other, _) => frame.state = State::AwaitKey,
        }
        Ok(())
    }

    fn on_coordinates(&mut self, depth: usize, token: Token) -> GeoJsonResult<()> {
        let frame = self.frame();
        match token {
            Token::ArrayStart => {
                frame.open_arrays.push(Vec::new());
                frame.state = State::InCoordinates(depth + 1);
            },
            Token::ArrayEnd => {
                let closed = CoordinateTree::Node(frame.open_arrays.pop().unwrap_or_default());
                match frame.open_arrays.last_mut() {
                    Some(parent) => {
                        parent.push(closed);
                        frame.state = State::InCoordinates(depth - 1);
                    },
                    None => {
                        frame.coordinates = Some(closed);
                        frame.state = State::AwaitKey;
                    },
                }
            },
            Token::Number(text) | Token::String(text) => {
                let ordinate = parse_ordinate(&text)?;
                if let Some(current) = frame.open_arrays.last_mut() {
                    current.push(CoordinateTree::Leaf(ordinate));
                }
            },
            Token::Bool(b) => return Err(GeoJsonError::MalformedNumber(b.to_string())),
            Token::Null => return Err(GeoJsonError::MalformedNumber("null".to_string())),
            Token::ObjectStart => return Err(GeoJsonError::MalformedNumber("object".to_string())),
            other => return Err(unexpected(&other, "a coordinate")),
        }
        Ok(())
    }

    fn on_geometries(&mut self, token: Token) -> GeoJsonResult<()> {
        match token {
            Token::ObjectStart => {
                self.frames.push(Frame::new());
                Ok(())
            },
            Token::ArrayEnd => {
                self.set_state(State::AwaitKey);
                Ok(())
            },
            other => Err(unexpected(&other, "a geometry object in 'geometries'")),
        }
    }

    fn close_object(&mut self) -> GeoJsonResult<()> {
        let frame = match self.frames.pop() {
            Some(frame) => frame,
            None => return Err(GeoJsonError::DecodeError("unbalanced object end".to_string())),
        };
        let geometry = build_geometry(frame)?;

        match self.frames.last_mut() {
            Some(parent) => {
                parent.geometries.get_or_insert_with(Vec::new).push(geometry);
            },
            None => self.result = Some(geometry),
        }
        Ok(())
    }
}

fn unexpected(token: &Token, expected: &str) -> GeoJsonError {
    GeoJsonError::DecodeError(format!("expected {}, found {:?}", expected, token))
}

/// Dispatch on the captured `type` once the object is closed
fn build_geometry(frame: Frame) -> GeoJsonResult<Geometry> {
    let type_name = frame
        .type_name
        .ok_or_else(|| GeoJsonError::DecodeError("geometry object has no 'type'".to_string()))?;

    let geometry_type: GeometryType = type_name.parse().map_err(|_| {
        GeoJsonError::DecodeError(format!("unrecognized geometry type \"{}\"", type_name))
    })?;
    debug!("Decoded geometry object of type {}", geometry_type);

    if geometry_type == GeometryType::GeometryCollection {
        let geometries = frame.geometries.ok_or_else(|| {
            GeoJsonError::DecodeError("GeometryCollection has no 'geometries'".to_string())
        })?;
        return Ok(Geometry::GeometryCollection(GeometryCollection { geometries }));
    }

    let tree = frame.coordinates.ok_or_else(|| {
        GeoJsonError::DecodeError(format!("{} has no 'coordinates'", geometry_type))
    })?;
    interpret(geometry_type, &tree)
}

/// Build a non-collection geometry from its coordinate tree
fn interpret(geometry_type: GeometryType, tree: &CoordinateTree) -> GeoJsonResult<Geometry> {
    let context = geometry_type.name();
    let geometry = match geometry_type {
        GeometryType::Point => Geometry::Point(Point::from(tree.to_coordinate(context)?)),
        GeometryType::LineString => Geometry::LineString(LineString::new(tree.to_sequence(context)?)),
        GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint {
            points: tree.to_sequence(context)?.into_iter().map(Point::from).collect(),
        }),
        GeometryType::Polygon => Geometry::Polygon(polygon_from_rings(tree.to_sequences(context)?)),
        GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineString {
            lines: tree.to_sequences(context)?.into_iter().map(LineString::new).collect(),
        }),
        GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon {
            polygons: tree
                .to_sequence_groups(context)?
                .into_iter()
                .map(polygon_from_rings)
                .collect(),
        }),
        GeometryType::GeometryCollection => {
            return Err(GeoJsonError::DecodeError(
                "GeometryCollection carries 'geometries', not 'coordinates'".to_string(),
            ))
        },
    };
    Ok(geometry)
}

fn polygon_from_rings(rings: Vec<Vec<Coordinate>>) -> Polygon {
    let mut rings = rings.into_iter().map(LineString::new);
    let exterior = rings.next().unwrap_or_default();
    Polygon::new(exterior, rings.collect())
}

/// Decodes GeoJSON geometry objects
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryDecoder;

impl GeometryDecoder {
    pub fn new() -> Self {
        GeometryDecoder
    }

    /// Decode from a forward-only token source
    ///
    /// Stops pulling as soon as the root object closes; trailing tokens are
    /// left in the source.
    pub fn decode_tokens<S: TokenSource>(&self, mut source: S) -> GeoJsonResult<Geometry> {
        let mut machine = GeometryStateMachine::new();
        while !machine.is_done() {
            match source.next_token()? {
                Some(token) => machine.feed(token)?,
                None => break,
            }
        }
        machine.finish()
    }

    /// Decode from an already parsed JSON value
    pub fn decode_value(&self, value: &Value) -> GeoJsonResult<Geometry> {
        if !value.is_object() {
            return Err(GeoJsonError::DecodeError("a geometry must be a JSON object".to_string()));
        }
        self.decode_tokens(ValueTokenSource::new(value))
    }

    /// Decode from an already parsed JSON object
    pub fn decode_map(&self, map: &Map<String, Value>) -> GeoJsonResult<Geometry> {
        self.decode_tokens(ValueTokenSource::from_map(map))
    }

    /// Decode by streaming from a reader
    ///
    /// The JSON grammar is enforced by serde_json; the geometry structure by
    /// the state machine.
    pub fn decode_reader<R: Read>(&self, reader: R) -> GeoJsonResult<Geometry> {
        decode_geometry_stream(reader)
    }

    /// Decode from a JSON string
    pub fn decode_str(&self, json: &str) -> GeoJsonResult<Geometry> {
        self.decode_reader(json.as_bytes())
    }
}
