use gc2n64_remapper::{
    DestButton, DocumentError, Mapping, Session, SourceButton, Target, codegen, document,
};

#[test]
fn edit_generate_save_and_restore() {
    let mut session = Session::with_mapping(Mapping::unassigned_all());
    session.set(SourceButton::A, DestButton::A);
    session.set(SourceButton::CStickUp, DestButton::CUp);

    let code = session.generate();
    assert_eq!(
        code,
        "// Button mapping function
void mapGamecubeToN64() {
    // Clear the N64 buffer
    memset(n64_buffer, 0, sizeof(n64_buffer));

    // Map A to A
    if (gc_status.data1 & 0x01) {
        n64_buffer[0] |= 0x80;
    }

    // C-Stick mappings
    // Map CStick Up to CUp
    if (gc_status.cstick_y > 0xB0) {
        n64_buffer[1] |= 0x08;
    }

}
"
    );

    let mut saved = Vec::new();
    session.save(&mut saved).unwrap();

    let mut restored = Session::new();
    restored.load(saved.as_slice()).unwrap();
    for source in SourceButton::all() {
        assert_eq!(restored.get(source), session.get(source), "{source}");
    }
    assert_eq!(restored.generate(), code);
}

#[test]
fn default_mapping_generates_every_button() {
    let code = codegen::generate(&Mapping::new());
    assert_eq!(code.matches("    // Map ").count(), 16);
    assert!(code.contains(
        "    // Map X to CRight\n    if (gc_status.data1 & 0x04) {\n        n64_buffer[1] |= 0x01;\n"
    ));
    assert!(code.contains(
        "    // Map L to L\n    if (gc_status.data2 & 0x40) {\n        n64_buffer[1] |= 0x20;\n"
    ));
    assert!(code.contains(
        "    // Map DLeft to DLeft\n    if (gc_status.data2 & 0x01) {\n        n64_buffer[0] |= 0x02;\n"
    ));
}

#[test]
fn document_from_an_older_vocabulary_still_compiles() {
    let json = br#"{
  "A": "B",
  "L": "ZL",
  "Select": "Start"
}"#;
    let mapping = document::decode(json).unwrap();

    assert_eq!(mapping.get(SourceButton::L), Target::Unknown("ZL".into()));
    assert_eq!(codegen::skipped_targets(&mapping), [(SourceButton::L, "ZL".to_owned())]);

    let code = codegen::generate(&mapping);
    assert!(code.contains(
        "    // Map A to B\n    if (gc_status.data1 & 0x01) {\n        n64_buffer[0] |= 0x40;"
    ));
    assert!(!code.contains("Map L to"));
    assert!(!code.contains("Select"));

    let document = document::encode(&mapping);
    assert_eq!(document["L"], "ZL");
    assert_eq!(document["Select"], "Start");
}

#[test]
fn malformed_document_leaves_session_untouched() {
    let mut session = Session::new();
    session.set(SourceButton::Z, DestButton::Start);
    let before = session.generate();

    let result = session.load(&b"\"just a string\""[..]);
    assert!(matches!(result, Err(DocumentError::Structural(_))));
    assert_eq!(session.get(SourceButton::Z), Target::Button(DestButton::Start));
    assert_eq!(session.generate(), before);
}
