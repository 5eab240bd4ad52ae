//! Hero text and the informational card sections of the landing page

pub const HERO_TITLE: &str = "Aventuras na Terra da Água!";
pub const HERO_SUBTITLE: &str =
    "Venha aprender sobre água, higiene e saneamento de um jeito super divertido!";
pub const FOOTER_NAME: &str = "Aventuras na Terra da Água";

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct InfoSection {
    pub heading: &'static str,
    pub cards: &'static [InfoCard],
}

pub static INFO_SECTIONS: [InfoSection; 2] = [
    InfoSection {
        heading: "Água Potável e Saneamento",
        cards: &[
            InfoCard {
                title: "Economia de Água",
                icon: "💧",
                bullets: &[
                    "Cada gota importa: pequenas ações diárias podem economizar muitos litros",
                    "No jogo, você aprenderá a identificar ações que desperdiçam ou conservam água",
                    "Descubra quanto cada ação pode economizar em sua casa",
                    "Aprenda dicas práticas que você pode aplicar no dia a dia",
                    "Torne-se um guardião da água e inspire outros a fazer o mesmo",
                ],
            },
            InfoCard {
                title: "Saneamento Básico",
                icon: "♻️",
                bullets: &[
                    "Aprenda a diferenciar boas e más práticas de saneamento",
                    "No jogo, você será desafiado a tomar decisões corretas para proteger o meio ambiente",
                    "Entenda como suas escolhas afetam a saúde da comunidade",
                    "Descubra por que o tratamento de água e esgoto é tão importante",
                    "Torne-se um defensor do saneamento básico em sua região",
                ],
            },
        ],
    },
    InfoSection {
        heading: "Impacto Global",
        cards: &[
            InfoCard {
                title: "Escassez de Água",
                icon: "🌊",
                bullets: &[
                    "2,2 bilhões de pessoas não têm acesso a água potável",
                    "A escassez de água afeta 40% da população mundial",
                    "Até 2025, metade da população viverá em áreas com escassez de água",
                    "A agricultura consome 70% da água doce disponível",
                    "Mudanças climáticas agravam a escassez de água",
                ],
            },
            InfoCard {
                title: "Falta de Saneamento",
                icon: "🗑️",
                bullets: &[
                    "4,2 bilhões de pessoas não têm acesso a saneamento seguro",
                    "673 milhões ainda praticam defecação a céu aberto",
                    "Doenças relacionadas à água matam mais de 3,4 milhões por ano",
                    "80% das águas residuais retornam ao ecossistema sem tratamento",
                    "Falta de saneamento custa US$ 260 bilhões anualmente à economia global",
                ],
            },
        ],
    },
];
