//! The node sum type held by a [`File`](crate::File).

use gocode_render::{CodeFragment, Renderable};

use crate::ast::{
    Code, Comment, Const, Documented, Function, FunctionType, Import, Interface, InterfaceMethod,
    Parameter, RawCode, Struct, StructField, Type, Var,
};

/// Any renderable Go construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Comment(Comment),
    Import(Import),
    Type(Type),
    Var(Var),
    Const(Const),
    Parameter(Parameter),
    StructField(StructField),
    Struct(Struct),
    FunctionType(FunctionType),
    Function(Function),
    InterfaceMethod(InterfaceMethod),
    Interface(Interface),
    Raw(RawCode),
}

macro_rules! node_variants {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )+

        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                match self {
                    $(Self::$variant(node) => node.to_fragments(),)+
                }
            }
        }

        impl Code for Node {
            fn render(&self) -> String {
                match self {
                    $(Self::$variant(node) => node.render(),)+
                }
            }
        }
    };
}

node_variants!(
    Comment(Comment),
    Import(Import),
    Type(Type),
    Var(Var),
    Const(Const),
    Parameter(Parameter),
    StructField(StructField),
    Struct(Struct),
    FunctionType(FunctionType),
    Function(Function),
    InterfaceMethod(InterfaceMethod),
    Interface(Interface),
    Raw(RawCode),
);

impl Node {
    /// The node as a doc-comment carrier, if it accepts doc comments.
    pub fn as_documented(&self) -> Option<&dyn Documented> {
        match self {
            Self::Var(n) => Some(n),
            Self::Const(n) => Some(n),
            Self::StructField(n) => Some(n),
            Self::Struct(n) => Some(n),
            Self::Function(n) => Some(n),
            Self::InterfaceMethod(n) => Some(n),
            Self::Interface(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_documented_mut(&mut self) -> Option<&mut dyn Documented> {
        match self {
            Self::Var(n) => Some(n),
            Self::Const(n) => Some(n),
            Self::StructField(n) => Some(n),
            Self::Struct(n) => Some(n),
            Self::Function(n) => Some(n),
            Self::InterfaceMethod(n) => Some(n),
            Self::Interface(n) => Some(n),
            _ => None,
        }
    }

    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Comment(_) => "comment",
            Self::Import(_) => "import",
            Self::Type(_) => "type",
            Self::Var(_) => "var",
            Self::Const(_) => "const",
            Self::Parameter(_) => "parameter",
            Self::StructField(_) => "struct field",
            Self::Struct(_) => "struct",
            Self::FunctionType(_) => "function type",
            Self::Function(_) => "function",
            Self::InterfaceMethod(_) => "interface method",
            Self::Interface(_) => "interface",
            Self::Raw(_) => "raw",
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_render() {
        let node = Node::from(Struct::new("Test"));
        assert_eq!(node.render(), "type Test struct{}");
        assert_eq!(node.kind(), "struct");
    }

    #[test]
    fn test_member_render_is_preserved() {
        let node = Node::from(StructField::new("Name", "string").doc("Name."));
        assert_eq!(node.to_string(), "// Name.\nName string");
    }

    #[test]
    fn test_documented_capability() {
        let mut node = Node::from(Function::new("Run"));
        node.as_documented_mut()
            .expect("functions accept docs")
            .add_doc(Comment::new("Run runs."));
        assert_eq!(node.render(), "// Run runs.\nfunc Run() {}");

        assert!(Node::from(Comment::new("x")).as_documented().is_none());
        assert!(Node::from(RawCode::new("x")).as_documented_mut().is_none());
        assert!(Node::from(Type::named("int")).as_documented().is_none());
    }
}
