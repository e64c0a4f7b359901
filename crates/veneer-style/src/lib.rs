//! Lexer, parser, and AST for **veneer style sheets** (`.vnr`).
//!
//! A style sheet is a list of named effect styles, each optionally refined per
//! interaction state. The crate has no dependencies so tooling can read style
//! sheets without the raster engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `StyleSheet`, `StyleBlock`, `Prop`, `Value`, `Unit` |
//! | [`error`] | `ParseError`, `ParseErrorKind` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str`, `parse_attributes` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use veneer_style::parse_str;
//!
//! let src = r#"
//!     style card {
//!         corner_size: 12dp
//!         stroke_color: #ffffff
//!     }
//!     style card:focused { stroke_color: #ffcc00 }
//! "#;
//!
//! let sheet = parse_str(src).unwrap();
//! assert_eq!(sheet.names(), vec!["card"]);
//! assert_eq!(sheet.states_of("card"), vec!["focused"]);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Prop, StyleBlock, StyleSheet, Unit, Value};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_attributes, parse_str};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> StyleSheet { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_sheet() { assert!(ok("").blocks.is_empty()); }
    #[test] fn empty_block() { ok("style plain { }"); }
    #[test] fn comments_anywhere() {
        ok("// header\nstyle a /* name */ {\n  // inside\n  corner_size: 4 /* tail */\n}");
    }
    #[test] fn state_block() {
        let s = ok("style a { stroke_size: 2 } style a:focused { stroke_size: 4 }");
        assert_eq!(s.block("a", Some("focused")).unwrap().prop("stroke_size"), Some(&Value::Number(4.0)));
    }
    #[test] fn all_value_kinds() {
        let s = ok(r#"style a {
            n: 1  d: 2dp  p: 3px  c: #01020304  s: "bubble"  i: padding  b: true
        }"#);
        let b = s.block("a", None).unwrap();
        assert_eq!(b.prop("d"), Some(&Value::Dimension(2.0, Unit::Dp)));
        assert_eq!(b.prop("c").and_then(Value::as_color), Some([1, 2, 3, 4]));
        assert_eq!(b.prop("s").and_then(Value::as_str), Some("bubble"));
        assert_eq!(b.prop("b").and_then(Value::as_bool), Some(true));
        assert_eq!(b.prop("n").and_then(Value::as_dimension), Some((1.0, Unit::Px)));
    }
    #[test] fn resolve_merges_state_over_base() {
        let s = ok("style a { x: 1  y: 2 } style a:pressed { y: 5  z: 6 }");
        let props = s.resolve("a", Some("pressed")).unwrap();
        let get = |k: &str| props.iter().rev().find(|p| p.key == k).map(|p| p.value.clone());
        assert_eq!(get("x"), Some(Value::Number(1.0)));
        assert_eq!(get("y"), Some(Value::Number(5.0)));
        assert_eq!(get("z"), Some(Value::Number(6.0)));
        assert!(s.resolve("missing", None).is_none());
        assert_eq!(s.resolve("a", Some("focused")).unwrap().len(), 2);
    }
    #[test] fn names_are_distinct_in_order() {
        let s = ok("style b {} style a {} style b:focused {}");
        assert_eq!(s.names(), vec!["b", "a"]);
    }
    #[test] fn attribute_list() {
        let props = parse_attributes("stroke_size: 2dp\nshadow_color: #000000").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[1].line, 2);
    }
    #[test] fn err_duplicate_block() {
        let e = err("style a {}\nstyle a:focused {}\nstyle a:focused {}");
        assert_eq!(e.kind, ParseErrorKind::DuplicateStyle);
        assert_eq!(e.line, 3);
        assert_eq!(e.style.as_deref(), Some("a:focused"));
        assert!(e.message.contains("line 2"));
    }
    #[test] fn err_names_block_and_property() {
        let e = err("style card {\n  corner_size: 4\n  stroke_size: {\n}");
        assert_eq!(e.kind, ParseErrorKind::Syntax);
        assert_eq!(e.style.as_deref(), Some("card"));
        assert_eq!(e.property.as_deref(), Some("stroke_size"));
        assert!(e.to_string().contains("in `card` property `stroke_size`"));
    }
    #[test] fn err_lexical_has_no_context() {
        let e = err("style a { c: 3em }");
        assert_eq!(e.kind, ParseErrorKind::Lexical);
        assert_eq!((e.style.clone(), e.property.clone()), (None, None));
    }
    #[test] fn err_attribute_list_names_property() {
        let e = parse_attributes("stroke_size 2").unwrap_err();
        assert_eq!(e.property.as_deref(), Some("stroke_size"));
        assert_eq!(e.style, None);
    }
    #[test] fn err_missing_colon() { err("style a { x 1 }"); }
    #[test] fn err_bad_color() { err("style a { c: #xyz }"); }
    #[test] fn err_unclosed_block() {
        let e = err("style a {\n  x: 1\n");
        assert!(e.message.contains("unclosed"));
    }
    #[test] fn err_display_has_position() {
        let e = err("style a { : }");
        assert!(e.to_string().starts_with("style parse error at 1:11"));
    }
}
