//! Tests robustesse : marteler le noyau sans brûler la machine.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!     * aucune panique, quelle que soit l'entrée (erreurs = valeurs)
//!     * déterminisme : même entrée => même sortie
//!     * expression bien formée => toujours Ok (inf/NaN acceptés)

use std::time::{Duration, Instant};

use super::eval::{evaluer, evaluer_texte};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_litteral(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        // décimal simple, toujours lisible en f64
        format!("{n}.{}", rng.pick(10))
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(6) {
        0 => '+',
        1 => '-',
        2 => '*',
        3 => '/',
        4 => '%',
        _ => '^',
    }
}

/// Expression bien formée : littéraux, binaires parenthésés, négation après '('.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_litteral(rng);
    }

    match rng.pick(4) {
        0 => gen_litteral(rng),
        1 | 2 => format!(
            "({}{}{})",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
        _ => format!("(-{})", gen_expr(rng, depth - 1)),
    }
}

/// Soupe de caractères arbitraire : lettres, opérateurs, points, parenthèses.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789.+-*/%^!()abcxyz ;=";
    let n = 1 + rng.pick(40) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn robustesse_bien_forme_toujours_ok() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        let v = evaluer(&expr)
            .unwrap_or_else(|e| panic!("expr bien formée rejetée: expr={expr:?} err={e}"));

        // inf/NaN acceptés (flottant natif), mais on veut une VALEUR
        let _ = v;
    }
}

#[test]
fn robustesse_soupe_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let soupe = gen_soupe(&mut rng);

        // erreurs = valeurs : l'appel lui-même ne doit jamais paniquer
        match evaluer(&soupe) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }

        // et le contrat texte rend toujours une chaîne non vide
        assert!(!evaluer_texte(&soupe).is_empty(), "soupe={soupe:?}");
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop \"sage\"");
}

#[test]
fn robustesse_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..120 {
        budget(t0, max);

        let soupe = gen_soupe(&mut rng);
        let a = evaluer_texte(&soupe);
        let b = evaluer_texte(&soupe);
        assert_eq!(a, b, "soupe={soupe:?}");
    }
}

#[test]
fn robustesse_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // ((1+1)+(1+1))+... : arbre équilibré, 800 feuilles
    let mut items: Vec<String> = (0..800).map(|_| "1".to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    let expr = items.pop().unwrap_or_else(|| "0".to_string());

    budget(t0, max);
    assert_eq!(evaluer(&expr), Ok(800.0));
}
