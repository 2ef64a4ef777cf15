mod common;

use common::{exists, EchoImporter, FailingImporter, Scratch, SMALL_IFC};
use ifc_convert::convert::convert_file;
use ifc_convert::error::{ConvertError, ImportError};
use ifc_convert::export::export_report;
use ifc_convert::model::ConversionReport;
use pretty_assertions::assert_eq;

#[test]
fn identity_importer_round_trips_bytes() {
    let scratch = Scratch::new("roundtrip");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());
    let output = scratch.path("model.frag");
    let importer = EchoImporter::default();

    let conversion = convert_file(&input, &output, &importer).unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), SMALL_IFC.as_bytes());
    assert_eq!(conversion.input_bytes, SMALL_IFC.len());
    assert_eq!(conversion.output_bytes, SMALL_IFC.len());
    assert_eq!(importer.calls.get(), 1);
}

#[test]
fn binary_input_is_passed_through_untouched() {
    let scratch = Scratch::new("binary");
    let bytes: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let input = scratch.write("model.ifczip", &bytes);
    let output = scratch.path("model.frag");

    let conversion = convert_file(&input, &output, EchoImporter::default()).unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), bytes);
    assert!(conversion.header.is_none());
}

#[test]
fn header_is_captured() {
    let scratch = Scratch::new("header");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());

    let conversion =
        convert_file(&input, scratch.path("out.frag"), EchoImporter::default()).unwrap();

    let header = conversion.header.unwrap();
    assert_eq!(header.schemas, vec!["IFC4".to_string()]);
    assert_eq!(header.originating_system.as_deref(), Some("Blender BIM"));
    assert_eq!(header.file_name.as_deref(), Some("wall.ifc"));
}

#[test]
fn missing_input_never_reaches_importer() {
    let scratch = Scratch::new("missing-input");
    let output = scratch.path("out.frag");
    let importer = EchoImporter::default();

    let err = convert_file(scratch.path("nope.ifc"), &output, &importer).unwrap_err();

    assert!(matches!(err, ConvertError::ReadInput { .. }));
    assert_eq!(importer.calls.get(), 0);
    assert!(!exists(&output));
}

#[test]
fn importer_failure_leaves_no_output() {
    let scratch = Scratch::new("import-fails");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());
    let output = scratch.path("out.frag");

    let err = convert_file(&input, &output, FailingImporter("wasm not found")).unwrap_err();

    match &err {
        ConvertError::Import {
            source: ImportError::Other { message },
        } => assert_eq!(message, "wasm not found"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("wasm not found"));
    assert!(!exists(&output));
}

#[test]
fn importer_failure_keeps_previous_output() {
    let scratch = Scratch::new("import-fails-existing");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());
    let output = scratch.write("out.frag", b"previous");

    convert_file(&input, &output, FailingImporter("boom")).unwrap_err();

    assert_eq!(std::fs::read(&output).unwrap(), b"previous");
}

#[test]
fn unwritable_output_is_reported_after_import() {
    let scratch = Scratch::new("unwritable");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());
    let output = scratch.path("missing-dir").join("out.frag");
    let importer = EchoImporter::default();

    let err = convert_file(&input, &output, &importer).unwrap_err();

    match err {
        ConvertError::WriteOutput { path, .. } => assert_eq!(path, output),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(importer.calls.get(), 1);
    assert!(!exists(&scratch.path("missing-dir")));
}

#[test]
fn repeated_runs_overwrite_deterministically() {
    let scratch = Scratch::new("repeat");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());
    let output = scratch.write("out.frag", &[b'x'; 4096]);

    convert_file(&input, &output, EchoImporter::default()).unwrap();
    let first = std::fs::read(&output).unwrap();
    convert_file(&input, &output, EchoImporter::default()).unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, SMALL_IFC.as_bytes());
    assert_eq!(first, second);
}

#[test]
fn report_describes_conversion() {
    let scratch = Scratch::new("report");
    let input = scratch.write("model.ifc", SMALL_IFC.as_bytes());
    let output = scratch.path("out.frag");
    let report_path = scratch.path("report.json");

    let conversion = convert_file(&input, &output, EchoImporter::default()).unwrap();
    let report = ConversionReport::from(&conversion);
    export_report(&report, &report_path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["input_bytes"], SMALL_IFC.len());
    assert_eq!(value["output_bytes"], SMALL_IFC.len());
    assert_eq!(value["schemas"], serde_json::json!(["IFC4"]));
    assert_eq!(value["originating_system"], "Blender BIM");
    assert_eq!(value["output"], &*output.to_string_lossy());
}
