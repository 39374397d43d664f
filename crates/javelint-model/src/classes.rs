//! Class and method registry mirroring the host's resolved hierarchy
//!
//! The host registers every class the analyzed code touches, including its
//! super types and instance method signatures, before building file models.
//! [`ClassRegistry::with_java_lang`] preloads the `java.lang` core the
//! inspections reason about: `Object`, `CharSequence`, `String` and
//! `StringBuilder` with their override relationships.

use std::collections::{HashMap, VecDeque};

use crate::arena::{Arena, SlotKey};
use crate::ty::{
    JavaType, Primitive, JAVA_LANG_CHAR_SEQUENCE, JAVA_LANG_OBJECT, JAVA_LANG_STRING,
    JAVA_LANG_STRING_BUILDER,
};

/// Stable handle to a registered class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub(crate) SlotKey);

/// Stable handle to a registered method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(pub(crate) SlotKey);

/// A class or interface known to the model.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// Fully qualified name
    pub name: String,
    /// Superclass and implemented interfaces, in declaration order
    pub supers: Vec<ClassId>,
    /// Methods declared directly on this class
    pub methods: Vec<MethodId>,
}

/// An instance method signature.
#[derive(Debug, Clone)]
pub struct MethodDef {
    pub owner: ClassId,
    pub name: String,
    pub params: Vec<JavaType>,
    pub return_type: JavaType,
    /// Last parameter is a varargs array
    pub is_varargs: bool,
    /// Methods this one directly overrides
    pub overrides: Vec<MethodId>,
}

/// Registry of classes and methods. Lookups never panic; dangling ids
/// resolve to `None`.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Arena<ClassDef>,
    methods: Arena<MethodDef>,
    by_name: HashMap<String, ClassId>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Registry preloaded with the `java.lang` core hierarchy.
    pub fn with_java_lang() -> Self {
        let mut registry = ClassRegistry::new();

        let object_ty = JavaType::class(JAVA_LANG_OBJECT);
        let string_ty = JavaType::class(JAVA_LANG_STRING);
        let cs_ty = JavaType::class(JAVA_LANG_CHAR_SEQUENCE);
        let sb_ty = JavaType::class(JAVA_LANG_STRING_BUILDER);
        let int_ty = JavaType::Primitive(Primitive::Int);
        let char_ty = JavaType::Primitive(Primitive::Char);
        let boolean_ty = JavaType::Primitive(Primitive::Boolean);

        let object = registry.add_class(JAVA_LANG_OBJECT, &[]);
        let object_to_string = registry.add_method(object, "toString", &[], string_ty.clone());
        registry.add_method(object, "equals", &[object_ty], boolean_ty.clone());
        registry.add_method(object, "hashCode", &[], int_ty.clone());

        // CharSequence declares its own toString(); it is an override root,
        // not an override of Object.toString()
        let char_sequence = registry.add_class(JAVA_LANG_CHAR_SEQUENCE, &[object]);
        let cs_length = registry.add_method(char_sequence, "length", &[], int_ty.clone());
        let cs_char_at =
            registry.add_method(char_sequence, "charAt", &[int_ty.clone()], char_ty.clone());
        let cs_sub_sequence = registry.add_method(
            char_sequence,
            "subSequence",
            &[int_ty.clone(), int_ty.clone()],
            cs_ty.clone(),
        );
        let cs_to_string = registry.add_method(char_sequence, "toString", &[], string_ty.clone());

        let string = registry.add_class(JAVA_LANG_STRING, &[object, char_sequence]);
        let string_to_string = registry.add_method(string, "toString", &[], string_ty.clone());
        registry.add_override(string_to_string, cs_to_string);
        registry.add_override(string_to_string, object_to_string);
        let string_length = registry.add_method(string, "length", &[], int_ty.clone());
        registry.add_override(string_length, cs_length);
        let string_char_at =
            registry.add_method(string, "charAt", &[int_ty.clone()], char_ty.clone());
        registry.add_override(string_char_at, cs_char_at);
        let string_sub_sequence = registry.add_method(
            string,
            "subSequence",
            &[int_ty.clone(), int_ty.clone()],
            cs_ty.clone(),
        );
        registry.add_override(string_sub_sequence, cs_sub_sequence);
        registry.add_method(string, "trim", &[], string_ty.clone());
        registry.add_method(string, "concat", &[string_ty.clone()], string_ty.clone());
        registry.add_method(string, "substring", &[int_ty.clone()], string_ty.clone());
        registry.add_method(
            string,
            "substring",
            &[int_ty.clone(), int_ty.clone()],
            string_ty.clone(),
        );
        registry.add_method(string, "isEmpty", &[], boolean_ty);

        // StringBuilder inherits charAt and subSequence from CharSequence
        let string_builder = registry.add_class(JAVA_LANG_STRING_BUILDER, &[object, char_sequence]);
        let sb_to_string = registry.add_method(string_builder, "toString", &[], string_ty);
        registry.add_override(sb_to_string, cs_to_string);
        registry.add_override(sb_to_string, object_to_string);
        let sb_length = registry.add_method(string_builder, "length", &[], int_ty);
        registry.add_override(sb_length, cs_length);
        registry.add_method(string_builder, "append", &[cs_ty], sb_ty.clone());
        registry.add_method(string_builder, "reverse", &[], sb_ty);

        registry
    }

    /// Register a class with its super types. The name must be unique.
    pub fn add_class(&mut self, name: impl Into<String>, supers: &[ClassId]) -> ClassId {
        let name = name.into();
        let id = ClassId(self.classes.insert(ClassDef {
            name: name.clone(),
            supers: supers.to_vec(),
            methods: Vec::new(),
        }));
        self.by_name.insert(name, id);
        id
    }

    /// Register an instance method on `owner`.
    pub fn add_method(
        &mut self,
        owner: ClassId,
        name: impl Into<String>,
        params: &[JavaType],
        return_type: JavaType,
    ) -> MethodId {
        self.insert_method(owner, name.into(), params.to_vec(), return_type, false)
    }

    /// Register a varargs method; the last parameter must be the varargs
    /// array type.
    pub fn add_varargs_method(
        &mut self,
        owner: ClassId,
        name: impl Into<String>,
        params: &[JavaType],
        return_type: JavaType,
    ) -> MethodId {
        self.insert_method(owner, name.into(), params.to_vec(), return_type, true)
    }

    fn insert_method(
        &mut self,
        owner: ClassId,
        name: String,
        params: Vec<JavaType>,
        return_type: JavaType,
        is_varargs: bool,
    ) -> MethodId {
        let id = MethodId(self.methods.insert(MethodDef {
            owner,
            name,
            params,
            return_type,
            is_varargs,
            overrides: Vec::new(),
        }));
        if let Some(class) = self.classes.get_mut(owner.0) {
            class.methods.push(id);
        }
        id
    }

    /// Record that `method` directly overrides `overridden`.
    pub fn add_override(&mut self, method: MethodId, overridden: MethodId) {
        if let Some(def) = self.methods.get_mut(method.0) {
            def.overrides.push(overridden);
        }
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.0)
    }

    pub fn method(&self, id: MethodId) -> Option<&MethodDef> {
        self.methods.get(id.0)
    }

    pub fn class_named(&self, qualified_name: &str) -> Option<ClassId> {
        self.by_name.get(qualified_name).copied()
    }

    /// True when the method's containing class has exactly this name.
    pub fn method_owned_by(&self, method: MethodId, class_name: &str) -> bool {
        self.method(method)
            .and_then(|def| self.class(def.owner))
            .map(|class| class.name == class_name)
            .unwrap_or(false)
    }

    /// Resolve `name(argc args)` starting at `class` and walking super types
    /// breadth-first. The nearest declaration wins.
    pub fn lookup_method(&self, class: ClassId, name: &str, argc: usize) -> Option<MethodId> {
        let mut queue = VecDeque::from([class]);
        let mut visited: Vec<ClassId> = Vec::new();
        while let Some(current) = queue.pop_front() {
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            let def = self.class(current)?;
            for &method in &def.methods {
                if let Some(candidate) = self.method(method) {
                    if candidate.name == name && arity_matches(candidate, argc) {
                        return Some(method);
                    }
                }
            }
            queue.extend(def.supers.iter().copied());
        }
        None
    }

    /// Parameter matched by the argument at `index`. Arguments past the end
    /// of a varargs signature align with the varargs parameter.
    pub fn parameter_at(&self, method: MethodId, index: usize) -> Option<&JavaType> {
        let def = self.method(method)?;
        match def.params.get(index) {
            Some(param) => Some(param),
            None if def.is_varargs => def.params.last(),
            None => None,
        }
    }

    /// The override roots reachable from `method`: every ancestor in its
    /// override graph that itself overrides nothing. Empty when `method`
    /// overrides nothing.
    pub fn deepest_super_methods(&self, method: MethodId) -> Vec<MethodId> {
        let mut roots = Vec::new();
        let mut visited = vec![method];
        let mut stack = match self.method(method) {
            Some(def) => def.overrides.clone(),
            None => return roots,
        };
        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            let Some(def) = self.method(current) else {
                continue;
            };
            if def.overrides.is_empty() {
                roots.push(current);
            } else {
                stack.extend(def.overrides.iter().copied());
            }
        }
        roots
    }
}

fn arity_matches(def: &MethodDef, argc: usize) -> bool {
    if def.is_varargs {
        argc + 1 >= def.params.len()
    } else {
        def.params.len() == argc
    }
}
