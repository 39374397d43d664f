//! Declaration traversal driving inspections over a file model

use javelint_model::{Cancelled, DeclId, FileModel};

/// Visitor over the declarations of a file. Both hooks default to doing
/// nothing, so an inspection overrides only the shapes it cares about.
pub trait DeclarationVisitor {
    fn visit_field(&mut self, _model: &FileModel, _decl: DeclId) -> Result<(), Cancelled> {
        Ok(())
    }

    fn visit_local(&mut self, _model: &FileModel, _decl: DeclId) -> Result<(), Cancelled> {
        Ok(())
    }
}

/// Drive a visitor over every declaration: fields in declaration order,
/// then locals in statement order.
pub fn visit_declarations<V: DeclarationVisitor>(
    model: &FileModel,
    visitor: &mut V,
) -> Result<(), Cancelled> {
    for &field in model.fields() {
        visitor.visit_field(model, field)?;
    }
    for local in model.local_declarations() {
        visitor.visit_local(model, local)?;
    }
    Ok(())
}
