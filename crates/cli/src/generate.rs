use crate::GenArgs;
use hookgen_core::model::SymbolModel;
use hookgen_core::model::reference::NodeRef;
use hookgen_core::{CodeGenerator, CodegenOptions};
use tracing::info;

pub fn run(args: GenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = CodegenOptions::load_or_default(args.config.as_deref())?;
    options.force_access_filter |= args.force_access;
    options.force_return_type_filter |= args.force_return_type;
    options.debug |= args.debug;
    if args.no_class_optimization {
        options.class_optimization = false;
    }

    let model = SymbolModel::load(&args.target.model)?;
    let reference = NodeRef::parse(&args.target.reference)?;
    let declaration = reference.resolve(&model, args.target.nth)?;
    info!("Generating snippet for {}", reference);

    let snippet = CodeGenerator::new(options).generate(declaration)?;
    println!("{}", snippet);
    Ok(())
}
