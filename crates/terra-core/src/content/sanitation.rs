//! "Missão Saneamento" game

use crate::catalog::{BinSpec, GameConfig, Item};
use crate::completion::CompletionText;

use super::{CORRECT_MESSAGE, DRAG_INSTRUCTIONS, FEEDBACK_DELAY_MS, PLAY_AGAIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitationCategory {
    Good,
    Bad,
}

static ITEMS: [Item<SanitationCategory>; 6] = [
    Item { id: 1, label: "Jogar lixo no lixo", category: SanitationCategory::Good },
    Item { id: 2, label: "Despejar esgoto em rios", category: SanitationCategory::Bad },
    Item { id: 3, label: "Lavar as mãos antes das refeições", category: SanitationCategory::Good },
    Item { id: 4, label: "Deixar água parada no quintal", category: SanitationCategory::Bad },
    Item { id: 5, label: "Tratar a água antes de beber", category: SanitationCategory::Good },
    Item { id: 6, label: "Não utilizar fossas sépticas", category: SanitationCategory::Bad },
];

static EXPLANATIONS: [(u32, &str); 6] = [
    (1, "Jogar lixo no lixo é uma boa prática! Isso evita a poluição do solo e da água, além de prevenir a proliferação de doenças."),
    (2, "Despejar esgoto em rios é uma prática prejudicial! Contamina a água, mata os peixes e pode causar várias doenças na população."),
    (3, "Lavar as mãos é fundamental! Esta prática previne doenças e é essencial para nossa saúde."),
    (4, "Água parada é perigosa! Ela serve como criadouro para o mosquito da dengue e outros vetores de doenças."),
    (5, "Tratar a água é essencial! Água não tratada pode conter microorganismos causadores de várias doenças."),
    (6, "Fossas sépticas são importantes! Sem elas, o esgoto contamina o solo e o lençol freático."),
];

pub static SANITATION_GAME: GameConfig<SanitationCategory> = GameConfig {
    key: "sanitation",
    title: "Missão Saneamento",
    icon: "👍",
    instructions: DRAG_INSTRUCTIONS,
    theme: "game-sanitation",
    items: &ITEMS,
    explanations: &EXPLANATIONS,
    bins: [
        BinSpec { category: SanitationCategory::Good, label: "Boa Prática", icon: "👍", tone: "good" },
        BinSpec { category: SanitationCategory::Bad, label: "Má Prática", icon: "👎", tone: "bad" },
    ],
    correct_message: CORRECT_MESSAGE,
    feedback_delay_ms: FEEDBACK_DELAY_MS,
    completion: CompletionText {
        perfect_heading: "🎉 PARABÉNS! 🎉",
        heading: "Jogo Concluído!",
        perfect: "Você é um verdadeiro defensor do saneamento básico! Acertou tudo!",
        passing: "Muito bem! Você está no caminho certo, mas ainda pode melhorar!",
        needs_practice: "Você pode melhorar! Que tal tentar novamente e aprender mais sobre saneamento básico?",
        play_again: PLAY_AGAIN,
    },
};
