//! "Quiz Diário da Água" questions

use crate::quiz::Question;

pub const QUIZ_TITLE: &str = "Quiz Diário da Água";

pub static QUIZ_QUESTIONS: [Question; 8] = [
    Question {
        prompt: "Quanto tempo você deve levar para lavar as mãos adequadamente?",
        options: ["5 segundos", "10 segundos", "20 segundos", "1 minuto"],
        correct: 2,
        explanation: "20 segundos é o tempo mínimo recomendado pela OMS para eliminar efetivamente os germes. Menos que isso não é suficiente para uma higienização adequada.",
    },
    Question {
        prompt: "Qual é a porcentagem aproximada de água no corpo humano adulto?",
        options: ["30%", "45%", "60%", "75%"],
        correct: 2,
        explanation: "O corpo humano é composto por aproximadamente 60% de água. Este alto percentual mostra como a água é essencial para nossa sobrevivência e funcionamento adequado do organismo.",
    },
    Question {
        prompt: "Quantos litros de água você pode economizar ao fechar a torneira enquanto escova os dentes?",
        options: ["2 litros", "6 litros", "12 litros", "20 litros"],
        correct: 2,
        explanation: "Ao deixar a torneira aberta durante a escovação, desperdiçamos cerca de 12 litros de água. Este volume poderia ser usado para outras necessidades essenciais.",
    },
    Question {
        prompt: "Qual é o principal problema de falta de água?",
        options: ["Falta de água", "Falta de saneamento", "Falta de energia", "Falta de alimentos"],
        correct: 1,
        explanation: "A falta de saneamento é o principal problema, pois afeta diretamente a qualidade da água disponível e causa diversas doenças na população.",
    },
    Question {
        prompt: "Qual é a principal fonte de água doce no mundo?",
        options: ["Rios", "Lagos", "Geleiras", "Aquíferos subterrâneos"],
        correct: 2,
        explanation: "As geleiras contêm cerca de 70% da água doce do planeta. Por isso, o derretimento das geleiras devido ao aquecimento global é tão preocupante.",
    },
    Question {
        prompt: "Quantos dias uma pessoa pode sobreviver sem água, em média?",
        options: ["1 dia", "3 dias", "7 dias", "14 dias"],
        correct: 1,
        explanation: "Uma pessoa só consegue sobreviver cerca de 3 dias sem água, enquanto pode ficar semanas sem comida. Isso mostra como a água é vital para nossa sobrevivência.",
    },
    Question {
        prompt: "Qual é o oceano mais profundo do mundo?",
        options: ["Oceano Atlântico", "Oceano Índico", "Oceano Ártico", "Oceano Pacífico"],
        correct: 3,
        explanation: "O Oceano Pacífico é o mais profundo, com pontos que chegam a 11 km de profundidade. Ele contém mais água que todos os outros oceanos juntos.",
    },
    Question {
        prompt: "Qual é o processo pelo qual a água se transforma em vapor?",
        options: ["Condensação", "Evaporação", "Precipitação", "Transpiração"],
        correct: 1,
        explanation: "A evaporação é o processo onde a água líquida se transforma em vapor. Este processo é fundamental no ciclo da água e na manutenção do clima.",
    },
];
