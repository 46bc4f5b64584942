//! Method body nodes.

/// An ordered sequence of statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    /// A block holding a single statement.
    pub fn of(stmt: Stmt) -> Self {
        Block { stmts: vec![stmt] }
    }

    pub fn last(&self) -> Option<&Stmt> {
        self.stmts.last()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// A statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Stmt {
    /// `return <expr>;` - exactly one operand.
    Return(Expr),
    /// Expression statement: `<expr>;`
    Expr(Expr),
    /// Statement kept as source text by the front-end.
    Opaque(String),
}

impl Stmt {
    /// `return <expr>;`
    pub fn ret(expr: Expr) -> Self {
        Stmt::Return(expr)
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }
}

/// An expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Expr {
    /// Self-reference: the receiver of the enclosing method (`this`).
    This,
    /// Expression kept as source text by the front-end.
    Opaque(String),
}
