use crate::error::ConvertError;
use crate::importer::Importer;
use crate::model::Conversion;
use crate::parser::parse_header;
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

/// Converts the IFC file at `input` into a fragments file at `output`.
///
/// The whole input is read into memory and handed to `importer`. The output
/// file is only touched once the importer has succeeded; an existing file is
/// overwritten. A missing parent directory is reported like any other write
/// failure.
///
/// # Errors
///
/// Returns [`ConvertError::ReadInput`] if the input cannot be read,
/// [`ConvertError::Import`] if the importer fails and
/// [`ConvertError::WriteOutput`] if the result cannot be written.
///
/// # Example
///
/// ```no_run
/// use ifc_convert::convert::convert_file;
/// use ifc_convert::importer::{ImporterConfig, NodeImporter};
///
/// let config = ImporterConfig::new("node_modules/web-ifc");
/// let importer = NodeImporter::new(config, "node_modules", "node");
/// let conversion = convert_file("model.ifc", "model.frag", &importer)?;
/// println!("{} bytes written", conversion.output_bytes);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_file<P, Q, I>(input: P, output: Q, importer: I) -> Result<Conversion, ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    I: Importer,
{
    let input = input.as_ref();
    let output = output.as_ref();
    let started = Instant::now();

    let bytes = std::fs::read(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    info!("read {} ({} bytes)", input.display(), bytes.len());

    let header = parse_header(&bytes);
    match &header {
        Some(h) => {
            info!("schema: {}", h.schema_label());
            if let Some(system) = &h.originating_system {
                debug!("originating system: {system}");
            }
            if let Some(name) = &h.file_name {
                debug!("header file name: {name}");
            }
        }
        None => warn!(
            "{} does not look like a STEP file, passing it through anyway",
            input.display()
        ),
    }

    let fragments = importer.process(&bytes)?;

    std::fs::write(output, &fragments).map_err(|source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", output.display(), fragments.len());

    Ok(Conversion {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        input_bytes: bytes.len(),
        output_bytes: fragments.len(),
        header,
        elapsed: started.elapsed(),
    })
}
