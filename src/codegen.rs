//! Emits the `mapGamecubeToN64()` function for the adapter firmware.

use tracing::debug;

use crate::{
    buttons::SourceButton,
    constants::{self, BUFFER_VAR, DestBit, FUNCTION_NAME, STATUS_VAR},
    mapping::{Mapping, Target},
};

/// Generate the remap function body for `mapping`.
///
/// Buttons mapped to `None` produce no block. Buttons mapped to a name outside the
/// N64 vocabulary are skipped as well (see [`skipped_targets`]).
pub fn generate(mapping: &Mapping) -> String {
    let mut code = String::new();

    code.push_str("// Button mapping function\n");
    code.push_str(&format!("void {FUNCTION_NAME}() {{\n"));
    code.push_str("    // Clear the N64 buffer\n");
    code.push_str(&format!("    memset({BUFFER_VAR}, 0, sizeof({BUFFER_VAR}));\n\n"));

    for (source, target) in mapping.entries() {
        let Some(gc_bit) = constants::source_bit(source) else {
            continue;
        };
        let Some(n64_bit) = resolve(source, &target) else {
            continue;
        };

        let condition = format!(
            "{STATUS_VAR}.{} & {}",
            gc_bit.register.field(),
            hex(gc_bit.mask)
        );
        push_block(&mut code, source, &target, &condition, n64_bit);
    }

    code.push_str("    // C-Stick mappings\n");
    for (source, target) in mapping.entries() {
        let Some(direction) = source.stick_direction() else {
            continue;
        };
        let Some(n64_bit) = resolve(source, &target) else {
            continue;
        };

        let test = constants::stick_test(direction);
        let condition = format!(
            "{STATUS_VAR}.{} {} {}",
            test.field,
            test.comparison,
            hex(test.threshold)
        );
        push_block(&mut code, source, &target, &condition, n64_bit);
    }

    code.push_str("}\n");
    code
}

/// Buttons whose target names no N64 button, with that name, in vocabulary order.
pub fn skipped_targets(mapping: &Mapping) -> Vec<(SourceButton, String)> {
    mapping
        .entries()
        .filter_map(|(source, target)| match target {
            Target::Unknown(name) => Some((source, name)),
            _ => None,
        })
        .collect()
}

fn resolve(source: SourceButton, target: &Target) -> Option<DestBit> {
    match target {
        Target::Unassigned => None,
        Target::Button(button) => Some(constants::dest_bit(*button)),
        Target::Unknown(name) => {
            debug!("Skipping {source}: `{name}` is not an N64 button");
            None
        }
    }
}

fn push_block(
    code: &mut String,
    source: SourceButton,
    target: &Target,
    condition: &str,
    bit: DestBit,
) {
    code.push_str(&format!("    // Map {source} to {target}\n"));
    code.push_str(&format!("    if ({condition}) {{\n"));
    code.push_str(&format!("        {BUFFER_VAR}[{}] |= {};\n", bit.index, hex(bit.mask)));
    code.push_str("    }\n\n");
}

fn hex(value: u8) -> String {
    format!("0x{value:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::DestButton;

    const SKELETON: &str = "// Button mapping function
void mapGamecubeToN64() {
    // Clear the N64 buffer
    memset(n64_buffer, 0, sizeof(n64_buffer));

    // C-Stick mappings
}
";

    #[test]
    fn all_unassigned_emits_only_the_skeleton() {
        assert_eq!(generate(&Mapping::unassigned_all()), SKELETON);
    }

    #[test]
    fn default_mapping_maps_a_to_a() {
        let code = generate(&Mapping::new());
        assert!(code.contains(
            "    // Map A to A
    if (gc_status.data1 & 0x01) {
        n64_buffer[0] |= 0x80;
    }
"
        ));
        assert!(code.starts_with("// Button mapping function\nvoid mapGamecubeToN64() {\n"));
        assert!(code.ends_with("    }\n\n}\n"));
    }

    #[test]
    fn cstick_up_compares_vertical_axis_against_high_threshold() {
        let mut mapping = Mapping::unassigned_all();
        mapping.set(SourceButton::CStickUp, DestButton::CUp);

        let expected = format!(
            "{}    // Map CStick Up to CUp
    if (gc_status.cstick_y > 0xB0) {{
        n64_buffer[1] |= 0x08;
    }}

}}
",
            SKELETON.trim_end_matches("}\n")
        );
        assert_eq!(generate(&mapping), expected);
    }

    #[test]
    fn stick_directions_pick_axis_and_comparison() {
        let code = generate(&Mapping::new());
        assert!(code.contains("if (gc_status.cstick_y < 0x50) {\n        n64_buffer[1] |= 0x04;"));
        assert!(code.contains("if (gc_status.cstick_x < 0x50) {\n        n64_buffer[1] |= 0x02;"));
        assert!(code.contains("if (gc_status.cstick_x > 0xB0) {\n        n64_buffer[1] |= 0x01;"));
    }

    #[test]
    fn blocks_follow_vocabulary_order() {
        let mut first = Mapping::unassigned_all();
        first.set(SourceButton::Z, DestButton::A);
        first.set(SourceButton::B, DestButton::B);

        let mut second = Mapping::unassigned_all();
        second.set(SourceButton::B, DestButton::B);
        second.set(SourceButton::Z, DestButton::A);

        let code = generate(&first);
        assert_eq!(code, generate(&second));
        assert!(code.find("// Map B to B").unwrap() < code.find("// Map Z to A").unwrap());
    }

    #[test]
    fn generation_is_deterministic() {
        let mapping = Mapping::new();
        assert_eq!(generate(&mapping), generate(&mapping));
    }

    #[test]
    fn many_to_one_emits_a_block_per_source() {
        let mut mapping = Mapping::unassigned_all();
        mapping.set(SourceButton::A, DestButton::A);
        mapping.set(SourceButton::X, DestButton::A);

        let code = generate(&mapping);
        assert_eq!(code.matches("n64_buffer[0] |= 0x80;").count(), 2);
        assert!(code.contains("if (gc_status.data1 & 0x04) {"));
    }

    #[test]
    fn unknown_targets_are_skipped_and_reported() {
        let mut mapping = Mapping::unassigned_all();
        mapping.set(SourceButton::L, Target::parse("ZL"));
        mapping.set(SourceButton::CStickLeft, Target::parse("CLeftish"));

        assert_eq!(generate(&mapping), SKELETON);
        assert_eq!(
            skipped_targets(&mapping),
            [
                (SourceButton::L, "ZL".to_owned()),
                (SourceButton::CStickLeft, "CLeftish".to_owned())
            ]
        );
    }

    #[test]
    fn extra_keys_never_emit_blocks() {
        let mut mapping = Mapping::unassigned_all();
        mapping.set_extra("Turbo", "A");
        assert_eq!(generate(&mapping), SKELETON);
    }
}
