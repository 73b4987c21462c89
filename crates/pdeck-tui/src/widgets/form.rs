//! Form line builder.
//!
//! Renders the profile as a flat list of styled lines: the basic info
//! section followed by one card per repeatable group. In View mode every
//! field is static text and no control exists anywhere in the output; in
//! Edit mode each field renders exactly one control seeded with the
//! draft's current value, plus an add-row action per group.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use pdeck_app::form::{error_for, spec_for, ControlKind};
use pdeck_app::state::{AppState, Mode};
use pdeck_core::{BasicField, FieldPath, GroupKind, Profile, RowField, PREFERRED};

const LABEL_WIDTH: usize = 18;
const CONTROL_WIDTH: usize = 28;

/// The built form: styled lines plus the line carrying focus (Edit mode).
pub struct FormLines {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

/// Build the full form surface for the current state.
pub fn build_form_lines(state: &AppState) -> FormLines {
    let profile = state.visible_profile();
    let edit = state.mode == Mode::Edit;

    let mut out = FormLines {
        lines: Vec::new(),
        focus_line: None,
    };
    // Walks the same order as the form entry list so focus indexes line up.
    let mut entry_idx = 0usize;

    out.lines.push(section_header("Personal Information"));
    for field in BasicField::ALL {
        push_field(state, profile, FieldPath::Basic(field), edit, &mut entry_idx, &mut out);
    }
    // Officer flag is set by the backend, never editable here.
    out.lines.push(static_field_line(
        "Officer",
        PREFERRED.label_for(if profile.isofficer { "true" } else { "false" }),
    ));

    for group in GroupKind::ALL {
        out.lines.push(Line::default());
        out.lines.push(section_header(group.title()));

        for index in 0..profile.group_len(group) {
            if index > 0 {
                out.lines.push(row_separator(index));
            }
            for field in group.row_fields() {
                let path = FieldPath::Row {
                    group,
                    index,
                    field: *field,
                };
                push_field(state, profile, path, edit, &mut entry_idx, &mut out);
            }
        }

        // The add-row action exists only while editing; View mode renders
        // no controls at all.
        if edit {
            let focused = entry_idx == state.form.focus;
            if focused {
                out.focus_line = Some(out.lines.len());
            }
            out.lines.push(add_row_line(group, profile, focused));
        }
        entry_idx += 1;
    }

    out
}

fn push_field(
    state: &AppState,
    profile: &Profile,
    path: FieldPath,
    edit: bool,
    entry_idx: &mut usize,
    out: &mut FormLines,
) {
    let focused = edit && *entry_idx == state.form.focus;
    if focused {
        out.focus_line = Some(out.lines.len());
    }

    if edit {
        out.lines.push(edit_field_line(state, profile, path, focused));
        if let Some(error) = error_for(&state.form.errors, path) {
            out.lines.push(error_line(&error.message));
        }
    } else {
        out.lines.push(view_field_line(profile, path));
    }

    *entry_idx += 1;
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_uppercase(),
        crate::theme::styles::section_header(),
    ))
}

fn row_separator(index: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("  ── {} {}", index + 1, "─".repeat(30)),
        crate::theme::styles::text_muted(),
    ))
}

fn padded_label(label: &str, required: bool, edit: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let marker = if edit && required { " *" } else { "" };
    let text = format!("{label}{marker}");
    let pad = LABEL_WIDTH.saturating_sub(text.width());
    spans.push(Span::styled(
        label.to_string(),
        crate::theme::styles::field_label(),
    ));
    if !marker.is_empty() {
        spans.push(Span::styled(
            marker.to_string(),
            crate::theme::styles::required_marker(),
        ));
    }
    spans.push(Span::raw(" ".repeat(pad + 2)));
    spans
}

/// The value shown for a field in View mode: decoded labels for
/// enumerated fields, an upload marker for the document path, the raw
/// value otherwise. Absent values fall back to the empty string.
fn view_value(profile: &Profile, path: FieldPath) -> String {
    let raw = profile.field(path).unwrap_or_default();
    match path {
        FieldPath::Row {
            field: RowField::IdFile,
            ..
        } => {
            if raw.is_empty() {
                String::new()
            } else {
                "Document Uploaded".to_string()
            }
        }
        FieldPath::Row { field, .. } => match field.code_set() {
            Some(codes) => codes.label_for(&raw).to_string(),
            None => raw,
        },
        FieldPath::Basic(_) => raw,
    }
}

fn view_field_line(profile: &Profile, path: FieldPath) -> Line<'static> {
    let spec = spec_for(path);
    let mut spans = vec![Span::raw("  ")];
    spans.extend(padded_label(spec.label, spec.required, false));
    spans.push(Span::styled(
        view_value(profile, path),
        crate::theme::styles::text_primary(),
    ));
    Line::from(spans)
}

fn static_field_line(label: &str, value: &str) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    spans.extend(padded_label(label, false, false));
    spans.push(Span::styled(
        value.to_string(),
        crate::theme::styles::text_primary(),
    ));
    Line::from(spans)
}

fn edit_field_line(
    state: &AppState,
    profile: &Profile,
    path: FieldPath,
    focused: bool,
) -> Line<'static> {
    let spec = spec_for(path);
    let mut spans = vec![if focused {
        Span::styled("▎ ", crate::theme::styles::focus_marker())
    } else {
        Span::raw("  ")
    }];
    spans.extend(padded_label(spec.label, spec.required, true));

    let raw = profile.field(path).unwrap_or_default();
    match spec.control {
        ControlKind::Select(codes) => {
            let label = if raw.is_empty() {
                "Select…".to_string()
            } else {
                codes.label_for(&raw).to_string()
            };
            let style = if raw.is_empty() {
                crate::theme::styles::action_disabled()
            } else {
                crate::theme::styles::text_primary()
            };
            spans.push(Span::styled("‹ ", crate::theme::styles::text_muted()));
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(" ›", crate::theme::styles::text_muted()));
        }
        ControlKind::Text | ControlKind::Date | ControlKind::File => {
            let (text, style) = if focused && state.form.editing {
                (
                    format!("{}▌", state.form.edit_buffer),
                    crate::theme::styles::control_editing(),
                )
            } else {
                (raw, crate::theme::styles::control())
            };
            spans.push(Span::styled(
                format!("{:<width$}", text, width = CONTROL_WIDTH),
                style,
            ));
        }
    }
    Line::from(spans)
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 4)),
        Span::styled(
            format!("✗ {message}"),
            crate::theme::styles::field_error(),
        ),
    ])
}

fn add_row_line(group: GroupKind, profile: &Profile, focused: bool) -> Line<'static> {
    let can_add = profile.can_add_row(group);
    let mut spans = vec![if focused {
        Span::styled("▎ ", crate::theme::styles::focus_marker())
    } else {
        Span::raw("  ")
    }];
    if can_add {
        spans.push(Span::styled(
            format!("[+ {}]", group.add_label()),
            crate::theme::styles::action_enabled(),
        ));
    } else {
        spans.push(Span::styled(
            format!("[+ {}] (max 5)", group.add_label()),
            crate::theme::styles::action_disabled(),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdeck_app::config::Settings;
    use pdeck_app::message::Message;
    use pdeck_app::{update, AppState};
    use pdeck_core::SessionContext;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_state() -> AppState {
        let mut state =
            AppState::with_settings(SessionContext::new("u-7", false), Settings::default());
        let profile: Profile = serde_json::from_str(
            r#"{
                "email": "j@x.com",
                "firstname": "Jane",
                "emails": [
                    {"emailaddress":"a@b.com","type":"1","preferred":"true"}
                ]
            }"#,
        )
        .unwrap();
        update(&mut state, Message::ProfileFetched(Box::new(profile)));
        state
    }

    #[test]
    fn test_view_mode_renders_no_controls() {
        let state = loaded_state();
        let form = build_form_lines(&state);
        let text = all_text(&form.lines);

        // No select chevrons, no add-row actions, no focus marker.
        assert!(!text.contains('‹'));
        assert!(!text.contains("[+"));
        assert!(!text.contains('▎'));
        assert!(form.focus_line.is_none());
    }

    #[test]
    fn test_view_mode_decodes_enumerated_fields() {
        let state = loaded_state();
        let text = all_text(&build_form_lines(&state).lines);

        // type "1" renders as Work, preferred "true" as Yes.
        assert!(text.contains("Work"));
        assert!(text.contains("Yes"));
        assert!(text.contains("a@b.com"));
    }

    #[test]
    fn test_unknown_code_passes_through_in_view() {
        let mut state = loaded_state();
        state.record.emails.edit_row(0, |row| row.kind = "9".into());
        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains('9'));
    }

    #[test]
    fn test_edit_mode_renders_one_control_per_field() {
        let mut state = loaded_state();
        update(&mut state, Message::EnterEdit);
        let form = build_form_lines(&state);
        let text = all_text(&form.lines);

        // Selects render chevrons: email type + preferred.
        assert_eq!(text.matches('‹').count(), 2);
        // Every group offers its add action.
        for group in GroupKind::ALL {
            assert!(text.contains(&format!("[+ {}]", group.add_label())));
        }
        // Focused entry (first basic field) is marked and pre-populated.
        assert!(form.focus_line.is_some());
        assert!(text.contains("j@x.com"));
    }

    #[test]
    fn test_empty_group_shows_enabled_add_control_in_edit() {
        let mut state = loaded_state();
        update(&mut state, Message::EnterEdit);
        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains("[+ Add Address]"));
        assert!(!text.contains("[+ Add Address] (max 5)"));
    }

    #[test]
    fn test_full_group_disables_add_control() {
        let mut state = loaded_state();
        update(&mut state, Message::EnterEdit);
        for _ in 0..5 {
            update(&mut state, Message::AddRow(GroupKind::Contacts));
        }
        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains("[+ Add Address] (max 5)"));
    }

    #[test]
    fn test_edit_buffer_renders_with_cursor() {
        let mut state = loaded_state();
        update(&mut state, Message::EnterEdit);
        // Focus starts on the email field; activate and type.
        update(&mut state, Message::ActivateEntry);
        update(&mut state, Message::FieldClear);
        update(&mut state, Message::FieldInput { ch: 'x' });

        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains("x▌"));
    }

    #[test]
    fn test_validation_errors_render_inline() {
        let mut state = loaded_state();
        update(&mut state, Message::EnterEdit);
        update(&mut state, Message::AddRow(GroupKind::Identifications));
        update(&mut state, Message::Submit);

        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains("✗ Expiry Date is required"));
    }

    #[test]
    fn test_document_renders_upload_marker_in_view() {
        let mut state = loaded_state();
        state.record.identifications = vec![pdeck_core::IdentificationRecord {
            idtype: "passport".into(),
            idexpiry: "2030-01-01".into(),
            idfile: "passport-scan.pdf".into(),
        }]
        .into();

        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains("Document Uploaded"));
        assert!(!text.contains("passport-scan.pdf"));
    }

    #[test]
    fn test_officer_flag_is_static_text_in_both_modes() {
        let mut state = loaded_state();
        let text = all_text(&build_form_lines(&state).lines);
        assert!(text.contains("Officer"));
        assert!(text.contains("No"));

        update(&mut state, Message::EnterEdit);
        let edit_text = all_text(&build_form_lines(&state).lines);
        assert!(edit_text.contains("Officer"));
    }

    #[test]
    fn test_required_markers_only_in_edit_mode() {
        let mut state = loaded_state();
        let view_text = all_text(&build_form_lines(&state).lines);
        assert!(!view_text.contains('*'));

        update(&mut state, Message::EnterEdit);
        let edit_text = all_text(&build_form_lines(&state).lines);
        assert!(edit_text.contains("Email *"));
    }
}
