use crate::ast::{Prop, StyleBlock, StyleSheet, Value};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos).map(|t| t.token.clone()).unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::syntax(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Token::Ident(_) => match self.advance() {
                Token::Ident(s) => Ok(s),
                _ => unreachable!("peeked an identifier"),
            },
            tok => Err(self.err(format!("expected identifier, got {:?}", tok))),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    // ── Sheet ─────────────────────────────────────────────────────────────

    pub fn parse_sheet(&mut self) -> Result<StyleSheet, ParseError> {
        let mut sheet = StyleSheet::default();
        while self.peek() != &Token::Eof {
            let block = self.parse_block()?;
            if let Some(prev) = sheet.block(&block.name, block.state.as_deref()) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateStyle,
                    format!("already defined on line {}", prev.line),
                    block.line,
                    1,
                )
                .in_style(display_name(&block)));
            }
            sheet.blocks.push(block);
        }
        Ok(sheet)
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// `style NAME (':' STATE)? '{' prop* '}'`
    fn parse_block(&mut self) -> Result<StyleBlock, ParseError> {
        let (line, _) = self.current_pos();
        self.expect_token(&Token::Style)?;
        let name = self.expect_ident()?;
        let state = if self.peek() == &Token::Colon {
            self.advance();
            Some(self.expect_ident()?)
        } else {
            None
        };
        let label = match &state {
            Some(state) => format!("{name}:{state}"),
            None => name.clone(),
        };
        let props = self.parse_block_body().map_err(|e| e.in_style(label))?;
        Ok(StyleBlock { name, state, props, line })
    }

    /// `'{' prop* '}'`
    fn parse_block_body(&mut self) -> Result<Vec<Prop>, ParseError> {
        self.expect_token(&Token::LBrace)?;
        let mut props = Vec::new();
        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => props.push(self.parse_prop()?),
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside style block, expected a property (key: value)",
                        tok
                    )));
                }
            }
        }
        Ok(props)
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_props_until_eof(&mut self) -> Result<Vec<Prop>, ParseError> {
        let mut props = Vec::new();
        while self.peek() != &Token::Eof {
            props.push(self.parse_prop()?);
        }
        Ok(props)
    }

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, _) = self.current_pos();
        let key = self.expect_ident()?;
        let value = self
            .expect_token(&Token::Colon)
            .and_then(|()| self.parse_value())
            .map_err(|e| e.in_property(&key))?;
        Ok(Prop { key, value, line })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = match self.peek() {
            Token::Str(s) => Value::Str(s.clone()),
            Token::Number(n) => Value::Number(*n),
            Token::Dimension(n, u) => Value::Dimension(*n, *u),
            Token::Color(c) => Value::Color(*c),
            Token::Ident(s) => Value::Ident(s.clone()),
            tok => return Err(self.err(format!("expected a value, got {:?}", tok))),
        };
        self.advance();
        Ok(value)
    }
}

fn display_name(block: &StyleBlock) -> String {
    match &block.state {
        Some(state) => format!("{}:{}", block.name, state),
        None => block.name.clone(),
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a `.vnr` style sheet.
pub fn parse_str(src: &str) -> Result<StyleSheet, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_sheet()
}

/// Parse a bare `key: value` list, as used for inline attribute sets.
pub fn parse_attributes(src: &str) -> Result<Vec<Prop>, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_props_until_eof()
}
