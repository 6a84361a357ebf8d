//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes :
//! - L’analyse n’utilise jamais la pile native : parenthèses et signes vont sur
//!   une pile explicite (tas). L’imbrication n’est limitée que par la mémoire.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::parentheses::normalize_parens;
use super::reglages::Reglages;
use super::{eval_detail, eval_expression};

fn valeur(expr: &str) -> f64 {
    eval_detail(expr, &Reglages::default())
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .valeur
}

fn assert_err(expr: &str) {
    assert_eq!(eval_expression(expr), "ERR", "expr={expr:?}");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorite_pourcentage_sur_produit() {
    // unaire/% > * / > + -
    assert_eq!(valeur("2*50%"), 1.0);
    assert_eq!(valeur("1+50%"), 1.5);
    assert_eq!(valeur("-2*-3"), 6.0);
    assert_eq!(valeur("-2+3"), 1.0);
    assert_eq!(valeur("8/2*4"), 16.0); // gauche -> droite
    assert_eq!(valeur("8-2+4"), 10.0);
}

#[test]
fn sci_associativite_gauche() {
    assert_eq!(valeur("2/2/2"), 0.5);
    assert_eq!(valeur("2-2-2"), -2.0);
    assert_eq!(valeur("2/(2/2)"), 2.0);
    assert_eq!(valeur("2-(2-2)"), 2.0);
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn sci_normalisation_ouvrantes_seules() {
    // solde jamais négatif => succès + exactement `solde` ')' ajoutées
    for (entree, solde) in [("(", 1), ("((1", 2), ("(1)+(2", 1), ("((((((5", 6)] {
        let sortie = normalize_parens(entree).unwrap();
        assert_eq!(sortie.len(), entree.len() + solde, "entrée {entree:?}");
        assert!(sortie.starts_with(entree));
        assert!(sortie[entree.len()..].chars().all(|c| c == ')'));
    }
}

#[test]
fn sci_fermante_avant_ouvrante() {
    for s in [")", "1)", "())", "(1))(", ")(1+2"] {
        assert!(
            matches!(
                normalize_parens(s),
                Err(ErreurCalcul::ParenthesesDesequilibrees { .. })
            ),
            "entrée {s:?}"
        );
        assert_err(s);
    }
}

#[test]
fn sci_ouvrantes_completees_puis_evaluees() {
    assert_eq!(eval_expression("(((1+1"), "2");
    assert_eq!(eval_expression("2*(3+4"), "14");
    assert_eq!(eval_expression("((2)*(3"), "6");
    // complétion en fin seulement : "(1+" reste incomplet
    assert_err("(1+");
}

/* ------------------------ Division ------------------------ */

#[test]
fn sci_division_jamais_infinie() {
    assert_err("1/0");
    assert_err("0/0");
    assert_err("5/(3-3)");
    assert_err("1/(0.1+0.2-0.3)"); // reste ~5.5e-17 < 1e-12
    assert_err("7/0%");
    assert_eq!(eval_expression("0/5"), "0");
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_affichage_idempotent_sur_entiers() {
    for s in ["1+2*3", "-17", "2*(3+4", "100%*300", "1"] {
        let une = eval_expression(s);
        let deux = eval_expression(&une);
        assert_eq!(une, deux, "expr={s:?}");
    }
}

#[test]
fn sci_bruit_flottant_absorbe() {
    assert_eq!(eval_expression("0.1*3"), "0.3");
    assert_eq!(eval_expression("0.1+0.2-0.3"), "0");
    assert_eq!(eval_expression("1/3*3"), "1");
}

/* ------------------------ Concurrence ------------------------ */

#[test]
fn sci_appels_concurrents_independants() {
    let handles: Vec<_> = (0..8)
        .map(|k| {
            std::thread::spawn(move || {
                for i in 0..200 {
                    let expr = format!("({k}+{i})*2");
                    assert_eq!(eval_expression(&expr), ((k + i) * 2).to_string());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("fil d’évaluation");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // boucle, pas de récursion : 50_000 termes sans risque pour la pile
    let expr = vec!["1"; 50_000].join(" + ");
    budget(t0, max);

    assert_eq!(eval_expression(&expr), "50000");
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 100_000 niveaux : accepté, sans débordement de pile
    let n = 100_000;
    let ok = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_expression(&ok), "7");
    budget(t0, max);

    // fermantes manquantes : complétées puis évaluées
    let ouvert = format!("{}7*2", "(-".repeat(n));
    assert_eq!(eval_expression(&ouvert), "14");
    budget(t0, max);

    // entrée hostile énorme : toujours ERR, jamais de plantage
    let hostile = "(-".repeat(100_000);
    assert_err(&hostile);
    budget(t0, max);
}

#[test]
fn sci_stress_grands_nombres() {
    // pas de big-int : f64, donc affichage scientifique au-delà de i64
    assert_eq!(eval_expression(&format!("1{}", "0".repeat(20))), "1e+20");
    assert_eq!(eval_expression("9007199254740993"), "9007199254740992");
    assert_err(&"9".repeat(400));
}
