//! Full output of each demonstration

use pretty_assertions::assert_eq;
use solid::*;

fn output_of(principle: Principle, ctx: &DemoContext) -> (String, Result<()>) {
    let mut buf = Vec::new();
    let result = principle.run(ctx, &mut buf);
    (String::from_utf8(buf).expect("utf-8 output"), result)
}

fn clean_output(principle: Principle) -> String {
    let (text, result) = output_of(principle, &DemoContext::skip_violations());
    result.expect("demonstration failed");
    text
}

// ═══════════════════════════════════════════════════════════════════════
// Compliant Runs
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_basics_output() {
    assert_eq!(
        clean_output(Principle::Basics),
        "Introduction to OOP\n\
         Area: 50.0\n\
         Area: 200.0\n\
         Area: 50.0\n\
         Area: 200.0\n\
         4 is even: true\n\
         4 is even: true\n\
         Customer Name: John Doe\n\
         Amount: 100.0\n\
         Customer Name: Jane Doe\n\
         Amount: 200.0\n"
    );
}

#[test]
fn test_srp_output() {
    assert_eq!(
        clean_output(Principle::Srp),
        "Single Responsibility Principle (SRP) Example\n\
         Salary of John Doe: 0.0\n\
         Saving employee John Doe to the database\n\
         Salary of Jane Doe: 0.0\n\
         Saving employee Jane Doe to the database\n"
    );
}

#[test]
fn test_ocp_output() {
    assert_eq!(
        clean_output(Principle::Ocp),
        "Open/Closed Principle (OCP) Example\n\
         Processing credit card payment\n\
         Processing PayPal payment\n\
         Processing credit card payment\n\
         Processing PayPal payment\n\
         Processing bank transfer payment\n"
    );
}

#[test]
fn test_lsp_output_without_violations() {
    assert_eq!(
        clean_output(Principle::Lsp),
        "Liskov Substitution Principle (LSP) Example\n\
         Sparrow is flying\n\
         Sparrow is flying\n\
         Sending email notification: Hello via Email!\n\
         Sending SMS notification: Hello via SMS!\n\
         Attaching file to email: file.txt\n"
    );
}

#[test]
fn test_isp_output_without_violations() {
    assert_eq!(
        clean_output(Principle::Isp),
        "Interface Segregation Principle (ISP) Example\n\
         Printing...\n\
         Scanning...\n\
         Printing...\n\
         Printing...\n\
         Scanning...\n\
         Faxing...\n"
    );
}

#[test]
fn test_dip_output() {
    assert_eq!(
        clean_output(Principle::Dip),
        "Dependency Inversion Principle (DIP) Example\n\
         Generating recommendations based on user's preferred genres...\n\
         Generating recommendations based on user's preferred genres...\n\
         Generating recommendations based on recently added movies...\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Violating Runs
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_non_violating_principles_ignore_trigger_flag() {
    for principle in Principle::ALL.into_iter().filter(|p| !p.has_violation()) {
        let (triggered, result) = output_of(principle, &DemoContext::new());
        result.expect("demonstration failed");
        assert_eq!(triggered, clean_output(principle), "{principle}");
    }
}

#[test]
fn test_lsp_stops_at_penguin() {
    let (text, result) = output_of(Principle::Lsp, &DemoContext::new());
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Unsupported operation: Penguins cannot fly");
    // Everything before the violating call was written
    assert_eq!(text, clean_output(Principle::Lsp));
}

#[test]
fn test_isp_stops_at_fax() {
    let (text, result) = output_of(Principle::Isp, &DemoContext::new());
    assert!(matches!(result, Err(SolidError::Unsupported(ref m)) if m == "Faxing not supported"));
    assert_eq!(text, clean_output(Principle::Isp));
}

#[test]
fn test_every_output_starts_with_title() {
    for principle in Principle::ALL {
        let text = clean_output(principle);
        assert_eq!(text.lines().next(), Some(principle.title()));
    }
}
