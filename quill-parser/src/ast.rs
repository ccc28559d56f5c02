use crate::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Integer(i64),
    String(String),
    Bool(bool),
    /// An absent branch. Evaluates to nothing.
    Void,
    /// A binary expression (e.g. `1 + 1`, `a < b`).
    BinOp {
        lhs: Box<Node>,
        op: TokenKind,
        rhs: Box<Node>,
    },
    /// A unary `+` or `-` (e.g. `-a`).
    UnaryOp { op: TokenKind, arg: Box<Node> },
    /// A variable read (e.g. `foo`).
    Variable(String),
    /// `var name = value`. Declares and reassigns alike.
    SetVariable { ident: String, value: Box<Node> },
    Block(Vec<Node>),
    Program(Vec<Node>),
    Condition(Condition),
    Flow(Flow),
    FunctionDecl(FunctionDecl),
    FunctionCall { ident: String, args: Vec<Node> },
    ReturnStatement(Box<Node>),
    While { condition: Box<Node>, body: Box<Node> },
}

/// One guarded branch: `body` runs when `predicate` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub predicate: Box<Node>,
    pub body: Box<Node>,
}

impl Condition {
    pub fn new(predicate: Node, body: Node) -> Self {
        Self {
            predicate: Box::new(predicate),
            body: Box::new(body),
        }
    }

    /// The branch used when an `if` has no `else`: always taken, does nothing.
    pub fn always_void() -> Self {
        Self::new(Node::Bool(true), Node::Void)
    }
}

/// `if ... elseif ... else ...`. `else_branch` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub if_branch: Condition,
    pub elseif_branches: Vec<Condition>,
    pub else_branch: Condition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub ident: String,
    pub params: Vec<String>,
    /// Always a [`Node::Block`].
    pub body: Box<Node>,
}
