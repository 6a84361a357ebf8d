// src/main.rs
//
// Calculatrice flottante : point d’entrée en ligne de commande
// -----------------------------------------------------------
// Hôte minimal du noyau : il lui passe un texte et affiche le texte rendu
// (nombre formaté ou "ERR"), rien de plus.
//
// - Arguments : une évaluation par argument
// - Sans argument : une évaluation par ligne lue sur stdin (lignes vides ignorées)
// - RUST_LOG=debug : motif interne des "ERR" sur stderr

use std::io::{self, BufRead, Write};

use clap::Parser as ClapParser;

use calculatrice_flottante::noyau::{eval_avec, eval_detail, Reglages, SENTINELLE};

#[derive(ClapParser, Debug)]
#[command(version, about = "Calculatrice flottante (+ - * / % et parenthèses)", long_about = None)]
struct Args {
    /// Expressions à évaluer (sinon : lecture de stdin, une par ligne)
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// Affiche la démarche (entrée corrigée, valeur, motif d’erreur)
    #[arg(short, long)]
    detail: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let reglages = Reglages::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.expressions.is_empty() {
        for expr in &args.expressions {
            afficher(&mut out, expr, &reglages, args.detail)?;
        }
        return Ok(());
    }

    for ligne in io::stdin().lock().lines() {
        let ligne = ligne?;
        if ligne.trim().is_empty() {
            continue;
        }
        afficher(&mut out, &ligne, &reglages, args.detail)?;
    }
    Ok(())
}

fn afficher(
    out: &mut impl Write,
    expr: &str,
    reglages: &Reglages,
    detail: bool,
) -> io::Result<()> {
    if !detail {
        return writeln!(out, "{}", eval_avec(expr, reglages));
    }

    match eval_detail(expr, reglages) {
        Ok(e) => writeln!(
            out,
            "{}\t(entrée: {:?}, valeur: {:?})",
            e.affichage, e.normalisee, e.valeur
        ),
        Err(e) => writeln!(out, "{SENTINELLE}\t({e})"),
    }
}
