/// SQL keywords and punctuation used by the clause compiler.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // statements
    SELECT,
    INSERT,
    INTO,
    VALUES,
    UPDATE,
    SET,
    DELETE,
    FROM,
    // clauses
    WHERE,
    INNER,
    JOIN,
    ON,
    ORDER,
    BY,
    ASC,
    DESC,
    LIMIT,
    OFFSET,
    // logic
    AND,
    IS,
    NOT,
    NULL,
    TRUE,
    // punctuation
    STAR,
    COMMA,
    LPAREN,
    RPAREN,
    // comparison
    EQ,
    NE,
    LT,
    GT,
    LE,
    GE,
}

impl Token {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::SELECT => "SELECT",
            Token::INSERT => "INSERT",
            Token::INTO => "INTO",
            Token::VALUES => "VALUES",
            Token::UPDATE => "UPDATE",
            Token::SET => "SET",
            Token::DELETE => "DELETE",
            Token::FROM => "FROM",
            Token::WHERE => "WHERE",
            Token::INNER => "INNER",
            Token::JOIN => "JOIN",
            Token::ON => "ON",
            Token::ORDER => "ORDER",
            Token::BY => "BY",
            Token::ASC => "ASC",
            Token::DESC => "DESC",
            Token::LIMIT => "LIMIT",
            Token::OFFSET => "OFFSET",
            Token::AND => "AND",
            Token::IS => "IS",
            Token::NOT => "NOT",
            Token::NULL => "NULL",
            Token::TRUE => "TRUE",
            Token::STAR => "*",
            Token::COMMA => ",",
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::GT => ">",
            Token::LE => "<=",
            Token::GE => ">=",
        }
    }

    /// Comparison operators get a space on both sides.
    #[inline]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::EQ | Token::NE | Token::LT | Token::GT | Token::LE | Token::GE
        )
    }

    /// Punctuation never separates itself from neighbours with a space.
    #[inline]
    pub const fn is_punctuation(&self) -> bool {
        matches!(self, Token::COMMA | Token::LPAREN | Token::RPAREN)
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
