use crate::view::DeclarationView;
use hookgen_core::HookgenError;
use hookgen_core::model::SymbolModel;
use std::path::PathBuf;
use tabled::{Table, settings::Style};

pub fn run(model: PathBuf, class: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let model = SymbolModel::load(&model)?;

    let classes = match &class {
        Some(name) => vec![
            model
                .find_class(name)
                .ok_or_else(|| HookgenError::NotFound(format!("class `{}`", name)))?,
        ],
        None => model.classes.iter().collect(),
    };

    let views: Vec<DeclarationView> = classes
        .into_iter()
        .flat_map(DeclarationView::for_class)
        .collect();
    println!("{}", Table::new(&views).with(Style::psql()));
    Ok(())
}
