//! "Jogo de Conservação de Água" game

use crate::catalog::{BinSpec, GameConfig, Item};
use crate::completion::CompletionText;

use super::{CORRECT_MESSAGE, DRAG_INSTRUCTIONS, FEEDBACK_DELAY_MS, PLAY_AGAIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterUseCategory {
    Conserve,
    Waste,
}

static ITEMS: [Item<WaterUseCategory>; 7] = [
    Item { id: 1, label: "Fechar a torneira ao escovar os dentes", category: WaterUseCategory::Conserve },
    Item { id: 2, label: "Tomar banhos longos", category: WaterUseCategory::Waste },
    Item { id: 3, label: "Consertar vazamentos", category: WaterUseCategory::Conserve },
    Item { id: 4, label: "Lavar o carro com mangueira", category: WaterUseCategory::Waste },
    Item { id: 5, label: "Reutilizar a água da chuva", category: WaterUseCategory::Conserve },
    Item { id: 6, label: "Deixar torneiras pingando", category: WaterUseCategory::Waste },
    Item { id: 7, label: "Lavar a calçada com mangueira", category: WaterUseCategory::Waste },
];

static EXPLANATIONS: [(u32, &str); 7] = [
    (1, "Fechar a torneira ao escovar os dentes é uma boa prática! Isso evita desperdício de água."),
    (2, "Tomar banhos longos é uma prática que desperdiça água. Banhos mais curtos são mais econômicos."),
    (3, "Consertar vazamentos é essencial para a conservação de água. Um vazamento pequeno pode desperdiçar muitos litros de água por dia."),
    (4, "Lavar o carro com mangueira é uma prática que desperdiça água. Alternativas como balde e esponja são mais econômicas."),
    (5, "Reutilizar a água da chuva para regar plantas e lavar calçadas é uma boa prática! Isso economiza água potável."),
    (6, "Deixar torneiras pingando é uma prática que desperdiça água. A torneira pingando desperdiça até 20 litros de água por dia."),
    (7, "Lavar a calçada com mangueira é uma prática que desperdiça água. Alternativas como balde e esponja são mais econômicas."),
];

pub static CONSERVATION_GAME: GameConfig<WaterUseCategory> = GameConfig {
    key: "conservation",
    title: "Jogo de Conservação de Água",
    icon: "💧",
    instructions: DRAG_INSTRUCTIONS,
    theme: "game-conservation",
    items: &ITEMS,
    explanations: &EXPLANATIONS,
    bins: [
        BinSpec { category: WaterUseCategory::Conserve, label: "Conserva Água", icon: "💧", tone: "conserve" },
        BinSpec { category: WaterUseCategory::Waste, label: "Desperdiça Água", icon: "🗑️", tone: "waste" },
    ],
    correct_message: CORRECT_MESSAGE,
    feedback_delay_ms: FEEDBACK_DELAY_MS,
    completion: CompletionText {
        perfect_heading: "🌊 INCRÍVEL! 🌊",
        heading: "Jogo Concluído!",
        perfect: "Você é um verdadeiro guardião da água! Parabéns pela pontuação perfeita!",
        passing: "Bom trabalho! Você entende bem sobre conservação de água, mas ainda pode aprender mais!",
        needs_practice: "Continue aprendendo sobre a importância da água! Tente novamente para melhorar sua pontuação.",
        play_again: PLAY_AGAIN,
    },
};
