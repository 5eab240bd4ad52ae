//! "Boas Práticas de Economia de Água" tips

use crate::practices::Tip;

pub const PRACTICES_TITLE: &str = "Boas Práticas de Economia de Água";

pub static DAILY_TIPS: [Tip; 6] = [
    Tip {
        title: "Tome banhos mais curtos",
        description: "Reduza o tempo do seu banho para 5 minutos.",
        icon: "🚿",
        saving_litres: 20,
    },
    Tip {
        title: "Reutilize a água da chuva",
        description: "Colete água da chuva para regar suas plantas.",
        icon: "🌧️",
        saving_litres: 50,
    },
    Tip {
        title: "Recicle a água",
        description: "Reutilize a água da máquina de lavar roupa.",
        icon: "♻️",
        saving_litres: 30,
    },
    Tip {
        title: "Feche a torneira",
        description: "Ao escovar os dentes ou fazer a barba, mantenha a torneira fechada.",
        icon: "🚰",
        saving_litres: 15,
    },
    Tip {
        title: "Lave o carro com balde",
        description: "Evite usar mangueira para lavar o carro.",
        icon: "🪣",
        saving_litres: 40,
    },
    Tip {
        title: "Conserte vazamentos",
        description: "Verifique e conserte torneiras pingando.",
        icon: "🔧",
        saving_litres: 45,
    },
];
