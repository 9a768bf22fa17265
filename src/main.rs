use markdown::{MarkdownOptions, MarkdownRenderer, create_style_sheet};
use widget::{HostForm, MarkdownWidget};

/// Headless demo: drives one widget through a simulated edit session and
/// prints what a host UI would observe.
fn main() {
    let renderer = MarkdownRenderer::with_options(MarkdownOptions::all());
    let mut editor = MarkdownWidget::new(renderer, HostForm::new());

    editor.set_attribute("required", None);
    editor.set_attribute("minlength", Some("5"));
    editor.connected(Some("# markpad\n\nType *markdown*, preview it, submit it."));

    // A focus session: rapid keystrokes coalesce into one commit, and the
    // blur emits a single change event.
    editor.focus();
    editor.input_edit("# markpad\n\nSim");
    editor.input_edit("# markpad\n\nSimulated edit session.");
    editor.tick();
    editor.blur();

    for event in editor.take_events() {
        println!("event: {event:?}");
    }
    println!("form value: {:?}", editor.internals().value());
    println!("valid: {}", editor.check_validity());

    editor.switch_to("viewer").expect("viewer is a known mode");
    editor.tick();

    let light = create_style_sheet("github", Some("(prefers-color-scheme: light)"));
    println!(
        "theme {:?} ({} bytes of css)",
        light.theme(),
        light.css().len()
    );
    println!("--- preview ---");
    println!("{}", editor.surface().viewer_content().html());
}
