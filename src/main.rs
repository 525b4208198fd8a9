mod logging;

use std::env;
use std::process;

use log::{error, info};
use usage_docs::xml_docs::{
    AssemblyLocationHint, Culture, DocsResult, PropertyMetadata, TypeMetadata, UsageDescriptor,
    UsageDescriptorFactory,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        // Use eprintln for usage info since logger isn't initialized yet
        eprintln!("Usage: {} <assembly_location> <type_full_name> [property_name]", args[0]);
        eprintln!("  <assembly_location>: Binary path or code base URI (file:///opt/app/Lib.dll)");
        eprintln!("  <type_full_name>: Fully qualified type name, nested types joined with '+'");
        eprintln!("  [property_name]: Describe this property of the type instead of the type");
        eprintln!(
            "Example: {} /opt/app/TagHelpers.dll MyApp.TagHelpers.EmailTagHelper MailTo",
            args[0]
        );
        eprintln!("The culture is taken from USAGE_DOCS_CULTURE, LC_ALL, LC_MESSAGES or LANG.");
        process::exit(1);
    }

    if let Err(e) = logging::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    info!("Usage docs starting");
    info!("Command line arguments: {:?}", args);

    let factory = UsageDescriptorFactory::new(Culture::current());
    info!("Using culture: {}", factory.culture());

    let assembly = assembly_hint(&args[1]);
    let declaring_type = TypeMetadata::new(args[2].clone(), assembly);

    let result = match args.get(3) {
        Some(property_name) => {
            let property = PropertyMetadata::new(property_name.clone(), declaring_type);
            factory.create_property_descriptor(&property)
        }
        None => factory.create_descriptor(&declaring_type),
    };

    if let Err(e) = print_descriptor(result) {
        error!("Failed to create usage descriptor: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!("Usage docs finished");
}

/// Arguments that look like URIs are code bases, everything else is a path
fn assembly_hint(argument: &str) -> AssemblyLocationHint {
    if argument.contains("://") {
        AssemblyLocationHint::from_code_base(argument)
    } else {
        AssemblyLocationHint::from_location(argument)
    }
}

fn print_descriptor(
    result: DocsResult<Option<UsageDescriptor>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = descriptor_json(result?)?;
    println!("{}", json);
    Ok(())
}

/// JSON output for a lookup; `null` when nothing is documented
fn descriptor_json(descriptor: Option<UsageDescriptor>) -> serde_json::Result<String> {
    match &descriptor {
        Some(_) => info!("Usage descriptor found"),
        None => info!("No usage documentation found"),
    }
    serde_json::to_string_pretty(&descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use usage_docs::xml_docs::DocsError;

    #[test]
    fn test_assembly_hint() {
        assert_eq!(
            assembly_hint("file:///opt/app/Lib.dll"),
            AssemblyLocationHint::from_code_base("file:///opt/app/Lib.dll")
        );
        assert_eq!(
            assembly_hint("/opt/app/Lib.dll"),
            AssemblyLocationHint::from_location("/opt/app/Lib.dll")
        );
    }

    #[test]
    fn test_descriptor_json() {
        assert_eq!(descriptor_json(None).unwrap(), "null");

        let descriptor = UsageDescriptor::new(Some("Summary.".to_string()), None);
        let json = descriptor_json(descriptor).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"], "Summary.");
    }

    #[test]
    fn test_print_descriptor_propagates_errors() {
        let failed: DocsResult<Option<UsageDescriptor>> = Err(DocsError::InvalidCulture {
            name: "??".to_string(),
        });
        assert!(print_descriptor(failed).is_err());
        assert!(print_descriptor(Ok(None)).is_ok());
    }
}
