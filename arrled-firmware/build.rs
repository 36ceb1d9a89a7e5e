// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_hints();

    // defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x - ESP32 Memory-Layout und Startup-Code
    // Muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Wird vom Linker als "--error-handling-script" mit (Fehler-Typ, Symbol) aufgerufen
fn linker_hints() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1];
        let what = &args[2];

        if kind != "undefined-symbol" {
            std::process::exit(1);
        }

        let hint = match what.as_str() {
            what if what.starts_with("_defmt_") => Some(
                "`defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature",
            ),
            "_stack_start" => Some("Is the linker script `linkall.x` missing?"),
            what if what.starts_with("esp_rtos_") => {
                Some("`esp-rtos` is not started - call `esp_rtos::start()` before spawning tasks")
            }
            _ => None,
        };
        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {}", hint);
            eprintln!();
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
