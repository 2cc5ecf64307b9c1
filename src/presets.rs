//! Ready-made plant grammars.
//!
//! Each preset carries its own turn angle, weighted productions, HSB palette keyed by digit,
//! and generation count. Every axiom starts with the marker `S`, which has no production
//! and no drawing meaning.

use crate::color::Color;
use crate::error::GrammarError;
use crate::grammar::Grammar;

/// A stochastic conifer: three equally likely whorl patterns around a trunk.
pub fn coniferous_tree() -> Result<Grammar, GrammarError> {
    Grammar::builder("SF")
        .angle(20.0)
        .rule(
            'F',
            [
                (1.0, "3F[++1F[X]][+2F][-4F][--5F[X]]6F"),
                (1.0, "3F[+1F][+2F][-4F]5F"),
                (1.0, "3F[+1F][-2F][--6F]4F"),
            ],
        )
        .deterministic_rule('X', "X")
        .color('1', Color::hsb(120.0, 100.0, 61.0))
        .color('2', Color::hsb(134.0, 97.0, 46.0))
        .color('3', Color::hsb(145.0, 87.0, 8.0))
        .color('4', Color::hsb(135.0, 84.0, 41.0))
        .color('5', Color::hsb(116.0, 26.0, 100.0))
        .color('6', Color::hsb(161.0, 71.0, 53.0))
        .generations(5)
        .build()
}

/// A radial burst of fractal rays.
pub fn sun() -> Result<Grammar, GrammarError> {
    Grammar::builder("S1[-F]++[F]++[F][--F]++[F]++[F][--F]++[F]++[F]")
        .angle(30.0)
        .deterministic_rule('F', "[F+F-FF+F-F]")
        .color('1', Color::hsb(56.0, 100.0, 100.0))
        .generations(3)
        .build()
}

pub fn shrub() -> Result<Grammar, GrammarError> {
    Grammar::builder("SX")
        .angle(20.0)
        .rule(
            'X',
            [
                (1.0, "1[[2-X][2-X+FX+FX][2+X]1-FX[2-XF]1F[2-X][2-X]]"),
                (1.0, "1[[2+X][2+X-FX-FX][2-X]1+FX[2+XF]1F[2+X][2+X]]"),
                (1.0, "1[[2-X][2-X+FXX+FX][2-FXFX]1-FX[2-XF][2-X]]"),
            ],
        )
        .deterministic_rule('F', "FFF")
        .color('1', Color::hsb(131.0, 100.0, 25.0))
        .color('2', Color::hsb(318.0, 22.0, 96.0))
        .color('3', Color::hsb(37.0, 52.0, 151.0))
        .generations(4)
        .build()
}

pub fn dandelion() -> Result<Grammar, GrammarError> {
    Grammar::builder("S1F")
        .angle(20.0)
        .deterministic_rule('F', "2X[++1F][+F][-F][--F]")
        .deterministic_rule('X', "2XX")
        .color('1', Color::hsb(16.0, 36.0, 75.0))
        .color('2', Color::hsb(50.0, 100.0, 96.0))
        .color('3', Color::hsb(19.0, 39.0, 38.0))
        .generations(4)
        .build()
}

/// Three stems; the left-leaning branch pattern is twice as likely as the right-leaning one.
pub fn bush() -> Result<Grammar, GrammarError> {
    Grammar::builder("S[FX]+[FX]+[FX]")
        .angle(25.0)
        .rule(
            'F',
            [
                (2.0, "0FF-[1-F+F]+[2+F-F]"),
                (1.0, "0FF+[1+F-F]+[2+F-F]"),
            ],
        )
        .deterministic_rule('X', "0FF+[1+F]+[2-F]")
        .color('0', Color::hsb(26.0, 100.0, 55.0))
        .color('1', Color::hsb(107.0, 100.0, 44.0))
        .color('2', Color::hsb(107.0, 44.0, 0.0))
        .generations(5)
        .build()
}

pub fn leaning_tree() -> Result<Grammar, GrammarError> {
    Grammar::builder("SF")
        .angle(22.0)
        .rule(
            'F',
            [
                (2.0, "1FF-[2-F+F+F]+[3+F-F-F]"),
                (1.0, "1FF+[2+F-F-F]-[3-F+F+F]"),
            ],
        )
        .color('1', Color::hsb(50.0, 50.0, 20.0))
        .color('2', Color::hsb(21.0, 100.0, 100.0))
        .color('3', Color::hsb(40.0, 95.0, 90.0))
        .generations(4)
        .build()
}

/// Every preset with its name.
pub fn all() -> Result<Vec<(&'static str, Grammar)>, GrammarError> {
    Ok(vec![
        ("coniferous_tree", coniferous_tree()?),
        ("sun", sun()?),
        ("shrub", shrub()?),
        ("dandelion", dandelion()?),
        ("bush", bush()?),
        ("leaning_tree", leaning_tree()?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_build() {
        let presets = all().unwrap();
        assert_eq!(presets.len(), 6);
        for (name, grammar) in &presets {
            assert!(grammar.axiom().starts_with('S'), "{name}");
            assert!(grammar.production('S').is_none(), "{name}");
        }
    }

    #[test]
    fn bush_weights_are_kept() {
        let bush = bush().unwrap();
        let weights: Vec<f32> = bush.production('F').unwrap().iter().map(|(w, _)| w).collect();
        assert_eq!(weights, [2.0, 1.0]);
        assert!(!bush.production('F').unwrap().is_deterministic());
        assert!(bush.production('X').unwrap().is_deterministic());
    }
}
