//! Type formatting for diagnostics.
//!
//! Named types declared in the package being checked print bare (`Shape`);
//! types from other packages print qualified (`geom.Shape`); predeclared
//! types print bare.

use exhaust_ir::{Name, StringInterner};

use super::Pool;
use crate::{Idx, Tag};

impl Pool {
    /// Format a type with every named type qualified by its package.
    pub fn format_type(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, None, interner, &mut buf);
        buf
    }

    /// Format a type relative to `package`: names declared there are bare.
    pub fn format_type_relative(
        &self,
        idx: Idx,
        package: Name,
        interner: &StringInterner,
    ) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, Some(package), interner, &mut buf);
        buf
    }

    fn format_type_into(
        &self,
        idx: Idx,
        relative_to: Option<Name>,
        interner: &StringInterner,
        buf: &mut String,
    ) {
        match self.tag(idx) {
            Tag::Bool => buf.push_str("bool"),
            Tag::Int => buf.push_str("int"),
            Tag::Float => buf.push_str("float64"),
            Tag::String => buf.push_str("string"),
            Tag::UntypedNil => buf.push_str("untyped nil"),
            Tag::Invalid => buf.push_str("invalid type"),

            Tag::Named => {
                let Some(decl) = self.named_type(idx) else {
                    buf.push_str("invalid type");
                    return;
                };
                let local = decl.package == Name::EMPTY || Some(decl.package) == relative_to;
                if !local {
                    buf.push_str(interner.lookup(decl.package));
                    buf.push('.');
                }
                buf.push_str(interner.lookup(decl.name));
            }

            Tag::Pointer => {
                buf.push('*');
                if let Some(elem) = self.pointer_elem(idx) {
                    self.format_type_into(elem, relative_to, interner, buf);
                }
            }

            Tag::Interface => {
                let mut methods = self.interface_methods(idx);
                if methods.is_empty() {
                    buf.push_str("interface{}");
                    return;
                }
                methods.sort_by_key(|&(name, _)| interner.lookup(name));
                buf.push_str("interface{");
                for (i, (name, signature)) in methods.into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str("; ");
                    }
                    buf.push_str(interner.lookup(name));
                    self.format_signature_into(signature, relative_to, interner, buf);
                }
                buf.push('}');
            }

            Tag::Struct => {
                buf.push_str("struct{");
                for (i, (name, ty)) in self.struct_fields(idx).into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str("; ");
                    }
                    buf.push_str(interner.lookup(name));
                    buf.push(' ');
                    self.format_type_into(ty, relative_to, interner, buf);
                }
                buf.push('}');
            }

            Tag::Function => {
                buf.push_str("func");
                self.format_signature_into(idx, relative_to, interner, buf);
            }
        }
    }

    /// Format `(params) results` without the `func` keyword.
    fn format_signature_into(
        &self,
        idx: Idx,
        relative_to: Option<Name>,
        interner: &StringInterner,
        buf: &mut String,
    ) {
        buf.push('(');
        for (i, param) in self.function_params(idx).into_iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_type_into(param, relative_to, interner, buf);
        }
        buf.push(')');

        let results = self.function_results(idx);
        match results.as_slice() {
            [] => {}
            [single] => {
                buf.push(' ');
                self.format_type_into(*single, relative_to, interner, buf);
            }
            many => {
                buf.push_str(" (");
                for (i, &result) in many.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(result, relative_to, interner, buf);
                }
                buf.push(')');
            }
        }
    }
}
