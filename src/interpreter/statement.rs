use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        core::{Interpreter, RunResult},
        cursor::{BlockEnd, TokenCursor},
        lexer::Token,
        value::Value,
    },
};

/// Consumes an identifier token or fails with a syntax error.
fn expect_identifier(cursor: &mut TokenCursor) -> Result<String, ParseError> {
    match cursor.current() {
        Token::Identifier(name) => {
            let name = name.clone();
            cursor.advance();
            Ok(name)
        },
        token => Err(ParseError::ExpectedToken { expected: "an identifier",
                                                 found:    token.to_string(), }),
    }
}

/// Consumes one specific token or fails with a syntax error.
pub(crate) fn expect(cursor: &mut TokenCursor,
                     token: &Token,
                     description: &'static str)
                     -> Result<(), ParseError> {
    if cursor.current() == token {
        cursor.advance();
        Ok(())
    } else {
        Err(ParseError::ExpectedToken { expected: description,
                                        found:    cursor.current().to_string(), })
    }
}

/// Requires a condition value to be a boolean.
fn expect_boolean(condition: Value, construct: &str) -> Result<bool, RuntimeError> {
    match condition {
        Value::Boolean(truth) => Ok(truth),
        other => Err(RuntimeError::TypeError { details: format!("{construct} condition must be a \
                                                                 boolean, got {}",
                                                                other.type_name()), }),
    }
}

impl Interpreter {
    /// Executes the single statement at the cursor.
    ///
    /// The keyword (or identifier) at the current position selects the
    /// statement form; there is no other state. Statements that are bare
    /// expressions return their value so the unit boundary can echo it;
    /// every other form returns `None`.
    pub(crate) fn exec_statement(&mut self, cursor: &mut TokenCursor) -> RunResult<Option<Value>> {
        match cursor.current() {
            Token::If => {
                cursor.advance();
                self.exec_if(cursor)?;
                Ok(None)
            },
            Token::While => {
                cursor.advance();
                self.exec_while(cursor)?;
                Ok(None)
            },
            Token::Function => {
                cursor.advance();
                self.exec_function_decl(cursor)?;
                Ok(None)
            },
            Token::Local => {
                cursor.advance();
                self.exec_local(cursor)?;
                Ok(None)
            },
            // Recognized keywords without a statement form. Rejecting them
            // here keeps the cursor from stalling on a token no form consumes.
            Token::Break => Err(ParseError::UnsupportedKeyword { keyword: "break" }.into()),
            Token::Return => Err(ParseError::UnsupportedKeyword { keyword: "return" }.into()),
            Token::For => Err(ParseError::UnsupportedKeyword { keyword: "for" }.into()),
            Token::Identifier(name) => {
                if matches!(cursor.peek(1), Token::Equals) {
                    cursor.advance();
                    cursor.advance();
                    let value = self.eval_expression(cursor)?;
                    self.store(name, value)?;
                    Ok(None)
                } else {
                    Ok(Some(self.eval_expression(cursor)?))
                }
            },
            token => Err(ParseError::UnexpectedStatement { token: token.to_string() }.into()),
        }
    }

    /// Executes an `if` statement, with the cursor just past the `if` (or
    /// `elseif`) keyword.
    ///
    /// A true condition executes statements up to the branch keyword at this
    /// nesting level, then skips the rest of the construct. A false condition
    /// skips to the next branch: `elseif` chains into a fresh conditional
    /// sharing the same closing `end`, `else` executes the remaining
    /// statements, and `end` just closes the construct.
    fn exec_if(&mut self, cursor: &mut TokenCursor) -> RunResult<()> {
        let condition = self.eval_expression(cursor)?;
        expect(cursor, &Token::Then, "'then' after if condition")?;

        if expect_boolean(condition, "if")? {
            loop {
                match cursor.current() {
                    Token::Else | Token::ElseIf | Token::End => break,
                    Token::EndOfInput => return Err(ParseError::UnexpectedEndOfInput.into()),
                    _ => {
                        self.exec_statement(cursor)?;
                    },
                }
            }
            cursor.skip_block(false)?;
        } else {
            match cursor.skip_block(true)? {
                BlockEnd::ElseIf => {
                    cursor.advance();
                    self.exec_if(cursor)?;
                },
                BlockEnd::Else => {
                    cursor.advance();
                    loop {
                        match cursor.current() {
                            Token::End => break,
                            Token::EndOfInput => {
                                return Err(ParseError::UnexpectedEndOfInput.into());
                            },
                            _ => {
                                self.exec_statement(cursor)?;
                            },
                        }
                    }
                    cursor.advance();
                },
                BlockEnd::End => {},
            }
        }

        Ok(())
    }

    /// Executes a `while` statement, with the cursor just past the `while`
    /// keyword.
    ///
    /// The condition's position is remembered; after each pass over the body
    /// the cursor rewinds there and the condition is re-evaluated. When it
    /// turns false the cursor skips past the loop's matching `end`.
    fn exec_while(&mut self, cursor: &mut TokenCursor) -> RunResult<()> {
        let condition_start = cursor.position();

        loop {
            let condition = self.eval_expression(cursor)?;
            expect(cursor, &Token::Do, "'do' after while condition")?;

            if !expect_boolean(condition, "while")? {
                break;
            }

            loop {
                match cursor.current() {
                    Token::End => break,
                    Token::EndOfInput => return Err(ParseError::UnexpectedEndOfInput.into()),
                    _ => {
                        self.exec_statement(cursor)?;
                    },
                }
            }

            cursor.rewind(condition_start);
        }

        cursor.skip_block(false)?;
        Ok(())
    }

    /// Executes a `function` declaration, with the cursor just past the
    /// `function` keyword.
    ///
    /// The header is `name()` with nothing between the parentheses; no
    /// parameter list is supported. The body tokens up to the matching `end`
    /// are copied into the registry and not executed now.
    fn exec_function_decl(&mut self, cursor: &mut TokenCursor) -> RunResult<()> {
        let name = expect_identifier(cursor)?;
        expect(cursor, &Token::LParen, "'(' after function name")?;
        expect(cursor, &Token::RParen, "')' after '(' (parameters are not supported)")?;

        let start = cursor.position();
        cursor.skip_block(false)?;
        let end = cursor.position() - 1;

        let body = cursor.tokens()[start..end].to_vec();
        self.define_function(name, body)?;
        Ok(())
    }

    /// Executes a `local` declaration, with the cursor just past the `local`
    /// keyword.
    ///
    /// `local` is purely syntactic: the binding lands in the same flat
    /// namespace as plain assignment and is visible everywhere afterwards.
    fn exec_local(&mut self, cursor: &mut TokenCursor) -> RunResult<()> {
        let name = expect_identifier(cursor)?;
        expect(cursor, &Token::Equals, "'=' after variable name")?;

        let value = self.eval_expression(cursor)?;
        self.store(&name, value)?;
        Ok(())
    }
}
