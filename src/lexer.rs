use crate::error::Error;
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Entries of the operator stack in the shunting-yard algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Op(Op),
    LParen,
}

/// An helper struct for lexing the input
///
/// The input must already be normalized and free of function calls: only
/// digits, `.`, `+ - * / ** ^ %`, parenthesis and whitespace are accepted.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    previous: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            input: string.chars().peekable(),
            previous: None,
        }
    }

    /// Scan the whole input into a flat sequence of tokens, in input order.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Scan the whole input and reorder the tokens in reverse polish
    /// notation, using the shunting-yard algorithm.
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        let mut operators: Vec<Pending> = Vec::new();

        'tokens: for token in self.tokenize()? {
            match token {
                Token::Number(_) => output.push(token),
                // a prefix operator has no left operand to reduce
                Token::Op(o1) if o1.is_unary() => operators.push(Pending::Op(o1)),
                Token::Op(o1) => {
                    while let Some(&Pending::Op(o2)) = operators.last() {
                        let pop_me = o1.is_left_associative() && o1.precedence() <= o2.precedence();
                        let pop_me =
                            pop_me || o1.is_right_associative() && o1.precedence() < o2.precedence();
                        if !pop_me {
                            break;
                        }
                        operators.pop();
                        output.push(Token::Op(o2));
                    }
                    operators.push(Pending::Op(o1));
                }
                Token::LParen => operators.push(Pending::LParen),
                Token::RParen => {
                    while let Some(pending) = operators.pop() {
                        match pending {
                            Pending::LParen => continue 'tokens,
                            Pending::Op(op) => output.push(Token::Op(op)),
                        }
                    }
                    return Err(Error::Syntax("mismatched parenthesis".into()));
                }
            }
        }

        while let Some(pending) = operators.pop() {
            match pending {
                Pending::LParen => return Err(Error::Syntax("mismatched parenthesis".into())),
                Pending::Op(op) => output.push(Token::Op(op)),
            }
        }
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(&c) = self.input.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.input.next();
        }

        let c = match self.input.next() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            c if is_number_part(c) => Token::Number(self.number(c)?),
            '+' => Token::Op(Op::Plus),
            '-' if self.expects_operand() => Token::Op(Op::Neg),
            '-' => Token::Op(Op::Minus),
            '*' => {
                if self.input.peek() == Some(&'*') {
                    self.input.next();
                    Token::Op(Op::Pow)
                } else {
                    Token::Op(Op::Mul)
                }
            }
            '^' => Token::Op(Op::Pow),
            '/' => Token::Op(Op::Div),
            '%' => Token::Op(Op::Mod),
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(Error::UnknownToken(other)),
        };
        self.previous = Some(token);
        Ok(Some(token))
    }

    /// Read the longest run of digits and decimal points starting at `first`
    fn number(&mut self, first: char) -> Result<f64, Error> {
        let mut literal = String::new();
        literal.push(first);
        while let Some(&c) = self.input.peek() {
            if !is_number_part(c) {
                break;
            }
            self.input.next();
            literal.push(c);
        }

        if literal.matches('.').count() > 1 {
            return Err(Error::Syntax(format!("malformed number {}", literal)));
        }
        literal
            .parse()
            .map_err(|_| Error::Syntax(format!("malformed number {}", literal)))
    }

    /// A `-` is a sign when nothing that could be a left operand precedes it
    fn expects_operand(&self) -> bool {
        match self.previous {
            None | Some(Token::Op(_)) | Some(Token::LParen) => true,
            Some(Token::Number(_)) | Some(Token::RParen) => false,
        }
    }
}

/// Check if `c` can appear inside a numeric literal
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}
