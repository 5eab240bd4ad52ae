//! "Guia de Qualidade da Água" entries

use crate::guide::WaterProblem;

pub const GUIDE_TITLE: &str = "Guia de Qualidade da Água";
pub const GUIDE_INTRO: &str =
    "Aprenda a identificar e resolver problemas comuns de qualidade da água em sua casa.";

pub static WATER_PROBLEMS: [WaterProblem; 4] = [
    WaterProblem {
        problem: "Água com cloro em excesso",
        symptoms: &[
            "Cheiro forte de cloro",
            "Gosto desagradável",
            "Irritação nos olhos ou na pele após o banho",
        ],
        solution: "Deixe a água parada em um recipiente aberto por algumas horas antes de consumir. Isso permitirá que o excesso de cloro evapore.",
        prevention: "Entre em contato com a companhia de água local para relatar o problema. Use filtros de carvão ativado para reduzir o cloro na água.",
    },
    WaterProblem {
        problem: "Água turva ou com partículas",
        symptoms: &["Aparência nebulosa ou leitosa", "Partículas visíveis na água"],
        solution: "Deixe a água descansar por algumas horas para que as partículas assentem. Use um filtro de sedimentos para remover as partículas.",
        prevention: "Verifique regularmente os encanamentos para detectar corrosão. Instale um sistema de filtragem na entrada de água da casa.",
    },
    WaterProblem {
        problem: "Água com gosto ou cheiro de terra ou mofo",
        symptoms: &["Sabor terroso", "Odor de mofo ou terra molhada"],
        solution: "Use um filtro de carvão ativado para remover os compostos que causam o gosto e o cheiro. Ferva a água antes de consumir.",
        prevention: "Limpe regularmente os reservatórios de água. Mantenha as torneiras e chuveiros limpos para evitar o acúmulo de bactérias.",
    },
    WaterProblem {
        problem: "Água avermelhada ou amarelada",
        symptoms: &[
            "Coloração avermelhada ou amarelada na água",
            "Manchas em roupas ou louças",
        ],
        solution: "Deixe a água correr por alguns minutos antes de usar. Instale um filtro de ferro se o problema for recorrente.",
        prevention: "Verifique se há tubulações de ferro enferrujadas em sua casa. Considere substituir encanamentos antigos.",
    },
];
