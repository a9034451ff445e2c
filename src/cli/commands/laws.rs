use anyhow::Result;

use crate::cli::ui;
use eqlaw::LawKind;

/// Law listing command
pub fn execute() -> Result<()> {
    ui::print_header("Equality Contract");

    for law in LawKind::CONTRACT {
        ui::print_result(law.name(), law.statement());
    }
    ui::print_result(
        &format!("{} (opt-in)", LawKind::HashAgreement.name()),
        LawKind::HashAgreement.statement()
    );

    println!();
    ui::print_text(eqlaw::SAMPLING_LIMITATION);
    Ok(())
}
