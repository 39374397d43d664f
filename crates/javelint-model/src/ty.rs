//! Nominal Java types as the host reports them
//!
//! The model keeps types deliberately shallow: a class type is its fully
//! qualified name, arrays wrap a component type, and only the handful of
//! primitives the inspections ever meet are distinguished.

use std::fmt;

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const JAVA_LANG_STRING: &str = "java.lang.String";
pub const JAVA_LANG_CHAR_SEQUENCE: &str = "java.lang.CharSequence";
pub const JAVA_LANG_STRING_BUILDER: &str = "java.lang.StringBuilder";

/// Primitive Java types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Char,
    Int,
    Long,
    Void,
}

impl Primitive {
    fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Void => "void",
        }
    }
}

/// A Java type: class reference, array, or primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    /// Class or interface type, by fully qualified name
    Class(String),
    /// Array type with its component
    Array(Box<JavaType>),
    Primitive(Primitive),
}

impl JavaType {
    pub fn class(name: impl Into<String>) -> Self {
        JavaType::Class(name.into())
    }

    pub fn array(component: JavaType) -> Self {
        JavaType::Array(Box::new(component))
    }

    /// True for a class type with exactly this qualified name.
    pub fn is_class(&self, qualified_name: &str) -> bool {
        matches!(self, JavaType::Class(name) if name == qualified_name)
    }

    /// True when the type is a class type matching any of the given names.
    pub fn is_one_of(&self, qualified_names: &[&str]) -> bool {
        qualified_names.iter().any(|name| self.is_class(name))
    }

    /// Qualified name when this is a class type.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            JavaType::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Element type after stripping every array dimension. Identity for
    /// non-array types.
    pub fn deep_component(&self) -> &JavaType {
        match self {
            JavaType::Array(component) => component.deep_component(),
            other => other,
        }
    }

    /// Last segment of the qualified name; arrays append `[]` per dimension.
    pub fn short_name(&self) -> String {
        match self {
            JavaType::Class(name) => name.rsplit('.').next().unwrap_or(name).to_string(),
            JavaType::Array(component) => format!("{}[]", component.short_name()),
            JavaType::Primitive(primitive) => primitive.keyword().to_string(),
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Class(name) => write!(f, "{}", name),
            JavaType::Array(component) => write!(f, "{}[]", component),
            JavaType::Primitive(primitive) => write!(f, "{}", primitive.keyword()),
        }
    }
}

/// How the written type of a declaration is spelled at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeForm {
    /// `var` declaration; the nominal type is inferred
    Inferred,
    /// Fully qualified reference, e.g. `java.lang.CharSequence`
    Qualified,
    /// Short reference, e.g. `CharSequence`
    Short,
}

/// The written type slot of a declaration: the nominal type plus how it is
/// spelled in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeElement {
    pub ty: JavaType,
    pub form: TypeForm,
}

impl TypeElement {
    pub fn short(ty: JavaType) -> Self {
        TypeElement {
            ty,
            form: TypeForm::Short,
        }
    }

    pub fn qualified(ty: JavaType) -> Self {
        TypeElement {
            ty,
            form: TypeForm::Qualified,
        }
    }

    /// A `var` declaration carrying the inferred type.
    pub fn inferred(ty: JavaType) -> Self {
        TypeElement {
            ty,
            form: TypeForm::Inferred,
        }
    }

    pub fn is_inferred(&self) -> bool {
        self.form == TypeForm::Inferred
    }

    /// The type as written in source.
    pub fn render(&self) -> String {
        match self.form {
            TypeForm::Inferred => "var".to_string(),
            TypeForm::Qualified => self.ty.to_string(),
            TypeForm::Short => self.ty.short_name(),
        }
    }
}
