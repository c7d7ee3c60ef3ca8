//! Script tables for the three goals.
//!
//! Strings must match the conference copy deck byte for byte, including
//! typos, trailing spaces, and duplicated entries. Do not tidy them.

use super::{Exchange, ExchangeVariants, Exchanges, GoalScript, Lines, Variants};

// ─── Copy shared by all three goals ─────────────────────────────────────────

const ASK_INDUSTRY: Variants = Variants {
    informal_en: "By the way, where in the health sector do you work?",
    informal_de: "In welchem Sektor der Gesundheitsbranche arbeitest Du eigentlich?",
    formal_en: "Another question please: in which sector of the healthcare industry do you work?",
    formal_de: "Eine andere Frage bitte: in welchem Sektor der Gesundheitsbranche arbeiten Sie?",
};

const INDUSTRY_REPLIES_EN: &[&str] = &[
    "Hospitals",
    "Insurance",
    "Pharma",
    "Medtech",
    "Healthcare IT",
    "Other",
];

const INDUSTRY_REPLIES_DE: &[&str] = &[
    "Krankenhaus",
    "Versicherung",
    "Pharma",
    "Medtech",
    "Healthcare IT",
    "Andere",
];

const INDUSTRY_COMMENTS_INFORMAL_EN: &[&str] = &[
    "Great! I can help you improve patient outcomes and save costs. ",
    "Great! I can help you save costs and improve patient outcomes. ",
    "Great! I can help you improve patient adherence and save costs. ",
    "Great! I can help you save costs and improve patient outcomes. ",
    "Great! I can help you save costs and improve patient outcomes. ",
    "Thank you! ",
];

const INDUSTRY_COMMENTS_INFORMAL_DE: &[&str] = &[
    "Super! Ich kann Dir helfen Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "Super! Ich kann Dir helfen Patienten Outcomes zu verbessern und Kosten zu sparen ",
    "Super! Ich kann Dir helfen Adherence und Compliance zu steigern und Kosten zu sparen. ",
    "Super! Ich kann Dir helfen Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "Super! Ich kann Dir helfen Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "OK, ",
];

const INDUSTRY_COMMENTS_FORMAL_EN: &[&str] = &[
    "Thank you! I can help you improve patient outcomes and save costs. ",
    "Thank you! I can help you save costs and improve patient outcomes. ",
    "Thank you! I can help you improve patient adherence and save costs. ",
    "Thank you! I can help you save costs and improve patient outcomes. ",
    "Thank you! I can help you save costs and improve patient outcomes. ",
    "Thank you! ",
];

const INDUSTRY_COMMENTS_FORMAL_DE: &[&str] = &[
    "Danke! Ich könnte Ihnen übrigens helfen, Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "Danke! Ich könnte Ihnen übrigens helfen, Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "Super! Ich könnte Ihnen helfen, Adherence und Compliance zu steigern und Kosten zu sparen. ",
    "Danke! Ich könnte Ihnen übrigens helfen, Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "Danke! Ich könnte Ihnen übrigens helfen, Patienten Outcomes zu verbessern und Kosten zu sparen. ",
    "Verstanden. ",
];

const INDUSTRY: ExchangeVariants = ExchangeVariants {
    informal_en: Exchange {
        replies: INDUSTRY_REPLIES_EN,
        comments: INDUSTRY_COMMENTS_INFORMAL_EN,
    },
    informal_de: Exchange {
        replies: INDUSTRY_REPLIES_DE,
        comments: INDUSTRY_COMMENTS_INFORMAL_DE,
    },
    formal_en: Exchange {
        replies: INDUSTRY_REPLIES_EN,
        comments: INDUSTRY_COMMENTS_FORMAL_EN,
    },
    formal_de: Exchange {
        replies: INDUSTRY_REPLIES_DE,
        comments: INDUSTRY_COMMENTS_FORMAL_DE,
    },
};

const REPORT_REPLIES_EN: &[&str] = &["Yes", "No", "Why would I?"];
const REPORT_REPLIES_DE: &[&str] = &["Ja", "Nein", "Warum?"];

const VALUE_BASED_HEALTHCARE: Variants = Variants {
    informal_en: "I’m determined to bring value-based healthcare to the world, and would love to keep in touch. My humans work to create bots like me in the health sector",
    informal_de: "Es ist meine Mission, Value-based Healthcare in die Welt zu tragen. Deshalb wäre es toll, wenn wir in Kontakt bleiben könnten. Meine Menschen arbeiten nämlich unablässig daran, Chatbots wie mich für die Gesundheitsbranche zu entwickeln",
    formal_en: "I am determined to bring value-based healthcare to the world, and would be eager to keep in touch. My team works to create bots like me in the health sector.",
    formal_de: "Es ist meine Mission, Value-based Healthcare in die Welt zu tragen. Deshalb würde ich mich freuen, wenn wir in Kontakt bleiben könnten. Meine Menschen arbeiten nämlich unablässig daran, Chatbots wie mich für die Gesundheitsbranche zu entwickeln.",
};

const ASK_SHARE_EMAIL: Variants = Variants {
    informal_en: "Would you like to share your email below to continue building me or learn more? No spam or newsletters, promise",
    informal_de: "Möchtest Du mir dazu Deine email Adresse geben? Kein Newsletter oder Spam. Versprochen",
    formal_en: "Would you like to share your email below to continue building me or learn more? You will receive neither newsletters nor spam.",
    formal_de: "Würden Sie mir Ihre email Adresse geben? Selbstverständlich bekommen Sie dann weder eine Newsletter noch Spam.",
};

const ASK_ENTER_EMAIL: Variants = Variants {
    informal_en: "Ok, what is your email address?",
    informal_de: "Toll, bitte gib Deine email jetzt ein",
    formal_en: "Thank you! Please enter your email address below.",
    formal_de: "Vielen Dank! Bitte geben Sie Ihre email Adresse jetzt ein.",
};

const ASK_REPEAT_EMAIL: Variants = Variants {
    informal_en: "Ah, could you please try that again?",
    informal_de: "Hmmm, die Adresse habe ich leider nicht verarbeiten können. Bitte gib sie nochmal ein",
    formal_en: "It appears there is something wrong with your entry. Please, try again.",
    formal_de: "Leider konnte ich Ihre email Adresse nicht verarbeiten. Bitte geben Sie sie nochmal ein.",
};

const THANK_VALID_EMAIL: Variants = Variants {
    informal_en: "Thank you!",
    informal_de: "Super, vielen Dank!",
    formal_en: "Thank you!",
    formal_de: "Vielen Dank!",
};

const HANDLE_EMAIL_RELUCTANCE: Variants = Variants {
    informal_en: "No problem!",
    informal_de: "Kein Problem, verstehe ich total",
    formal_en: "Of course, I fully understand. Nevertheless, many thanks!",
    formal_de: "Das verstehe ich natürlich. Trotzdem vielen Dank!",
};

// ─── chronic: chronic disease prevention ────────────────────────────────────

pub(super) static CHRONIC: GoalScript = GoalScript {
    lines: Lines {
        offer_and_greet: Variants {
            informal_en: "Hey, have a chocolate if you'd like. I'm Ariana, by the way",
            informal_de: "Hallo, ich bin Ariana. Und ich habe Schokolade, falls Du welche möchtest",
            formal_en: "Hello, I am Ariana. If you would like a piece of chocolate, please have one from our stand.",
            formal_de: "Guten Tag, ich bin Ariana. Übrigens gibt es an unserem Stand Schokolade, falls Sie welche möchten.",
        },
        ask_if_fan: Variants {
            informal_en: "You a fan of chocolate?",
            informal_de: "Magst Du Schokolade?",
            formal_en: "Are you fond of chocolate?",
            formal_de: "Mögen Sie Schokolade denn?",
        },
        did_you_know: Variants {
            informal_en: "Did you know it's high in caffeine and lacks nutritional value?",
            informal_de: "Wusstest Du, dass Schokolade viel Koffein enthält und sonst nur wenige gesunde Nährstoffe?",
            formal_en: "Did you know it is high in caffeine and lacks nutritional value?",
            formal_de: "Wussten Sie, dass Schokolade viel Koffein enthält und sonst nur wenige gesunde Nährstoffe?",
        },
        bust_myth: Variants {
            informal_en: "That’s actually a myth! A bar of chocolate is like a decaf cup of coffee, plus it’s a good source of iron and zinc. In moderation it can be a good thing \n\nMany factors affect our health, and a balanced diet goes a long way towards preventing chronic diseases. I've been recommending people grab a banana from the bowl on the booth",
            informal_de: "Tatsächlich stimmt das nicht! Ein Stück Schokolade hat nicht mehr Koffein als eine Tasse koffeinfreier Kaffee. Gleichzeitig ist Schokolade eine wertvolle Quelle für Eisen und Zink. Wenn man nicht zu viel davon isst, ist das also eine gute Sache. \n\nViele Faktoren beeinflussen Deine Gesundheit. Eine ausgewogene Ernährung hilft, chronischen Erkrankungen vorzubeugen. Mein Vorschlag: nimm Dir doch etwas Obst aus der Schüssel an unserem Stand",
            formal_en: "That is actually a myth! A bar of chocolate is like a decaf cup of coffee, and a good source of iron and zinc. In moderation it can be a good thing. \n\nMany factors affect our health, and a balanced diet goes a long way towards preventing chronic diseases. I have been recommending people take a banana from the bowl on the booth.",
            formal_de: "Tatsächlich stimmt das nicht! Ein Stück Schokolade hat nicht mehr Koffein als eine Tasse koffeinfreier Kaffee. Gleichzeitig ist Schokolade eine wertvolle Quelle für Eisen und Zink. Wenn man nicht zu viel davon isst, ist das also eine gute Sache. \n\nViele Faktoren beeinflussen Ihre Gesundheit. Eine ausgewogene Ernährung hilft, chronischen Erkrankungen vorzubeugen. Mein Vorschlag: nehmen Sie sich doch etwas Obst aus der Schüssel an unserem Stand.",
        },
        ask_found_at_conf: Variants {
            informal_en: "Have you found any good food here at ConhIT?",
            informal_de: "Hast Du hier auf der ConhIT denn sonst etwas Gutes zu essen gefunden?",
            formal_en: "Have you found any good food here at ConhIT?",
            formal_de: "Haben Sie hier auf der ConhIT denn sonst etwas Gutes zu essen gefunden?",
        },
        explicit_offer: Variants {
            informal_en: "It can be hard to remember to choose healthier options, so I encourage my humans to keep fruits/veggies close by to remind them. Have one if you'd like!",
            informal_de: "Ist auch nicht immer einfach. Deshalb ermutige ich meine Menschen immer etwas Obst oder Gemüse griffbereit zu haben. Gelegenheit mach Liebe so zu sagen. Nimm Dir also gerne was",
            formal_en: "It can be hard to remember to choose healthier options, so I encourage everyone to keep fruits or vegetables close by to remind them. Please, have one if you would like!",
            formal_de: "Deshalb ermutige ich mein Team immer etwas Obst oder Gemüse griffbereit zu haben. Bitte greifen Sie zu, wenn Sie mögen!",
        },
        ask_industry: ASK_INDUSTRY,
        value_based_healthcare: VALUE_BASED_HEALTHCARE,
        ask_share_email: ASK_SHARE_EMAIL,
        ask_enter_email: ASK_ENTER_EMAIL,
        ask_repeat_email: ASK_REPEAT_EMAIL,
        thank_valid_email: THANK_VALID_EMAIL,
        handle_email_reluctance: HANDLE_EMAIL_RELUCTANCE,
        ask_report: Variants {
            informal_en: "By the way, did you end up taking a fruit during our conversation?",
            informal_de: "Sag mal, hast Du Dir während wir gechattet haben eigentlich ein Stück Obst genommen?",
            formal_en: "Did you actually take a piece of fruit while we were chatting?",
            formal_de: "Haben Sie sich während wir gechattet haben eigentlich ein Stück Obst genommen?",
        },
        say_thanks_bye_keep_touch: Variants {
            informal_en: "You know what truly matters in diet? Balance. Which can include a piece of chocolate. Thanks for dropping by, enjoy the rest of ConhIT, and we'll be in touch!",
            informal_de: "Und jetzt weißt Du, worauf es ankommt: eine ausgewogene Ernährung. Und da darf auch mal ein Stück Schokolade dabei sein. Danke, dass Du hier warst. Viel Spaß noch auf der ConhIT!",
            formal_en: "You know what truly matters in diet? Balance. Which can include a piece of chocolate. Thank you for dropping by, enjoy the rest of ConhIT, and we will be in touch!",
            formal_de: "Jetzt wissen Sie, worauf es ankommt: eine ausgewogene Ernährung. Und da darf auch mal ein Stück Schokolade dabei sein. Danke, dass Sie sich die Zeit genommen haben. Viel Spaß noch auf der ConhIT!",
        },
        say_thanks_bye: Variants {
            informal_en: "You know what truly matters in diet? Balance. Which can include a piece of chocolate. Thanks for dropping by, and enjoy the rest of ConhIT!",
            informal_de: "Und jetzt weißt Du, worauf es ankommt: eine ausgewogene Ernährung. Und da darf auch mal ein Stück Schokolade dabei sein. Danke, dass Du hier warst. Viel Spaß noch auf der ConhIT!",
            formal_en: "You know what truly matters in diet? Balance. Which can include a piece of chocolate. Thank you for dropping by, and enjoy the rest of ConhIT!",
            formal_de: "Jetzt wissen Sie, worauf es ankommt: eine ausgewogene Ernährung. Und da darf auch mal ein Stück Schokolade dabei sein. Danke, dass Sie sich die Zeit genommen haben. Viel Spaß noch auf der ConhIT!",
        },
    },
    exchanges: Exchanges {
        if_fan: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Sometimes"],
                comments: &[
                    "I've heard great things about it, but...",
                    "No problem, not everyone's a fan.",
                    "That's fair.",
                ],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Manchmal"],
                comments: &[
                    "Ich habe viel Gutes darüber gehört, aber...",
                    "Kein Thema, das geht wohl einigen Menschen so.",
                    "Immerhin. Man muss sich ja nicht festlegen.",
                ],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Sometimes"],
                comments: &[
                    "I have heard good things about it, but...",
                    "Some of the best people aren't either.",
                    "Fair enough.",
                ],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Manchmal"],
                comments: &[
                    "Ich habe viel Gutes darüber gehört, aber...",
                    "Das geht wohl einigen Menschen so.",
                    "Verständlich. Man muss sich ja nicht immer festlegen.",
                ],
            },
        },
        did_you_know: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Whatever"],
                comments: &["Well... ", "Well, no wonder... ", ""],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Na und?"],
                comments: &["Nicht ganz... ", "Kein Wunder, denn... ", ""],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Whatever"],
                comments: &["Well... ", "Well, no wonder... ", ""],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Nicht relevant"],
                comments: &["Nicht ganz... ", "Das wundert mich nicht, denn... ", ""],
            },
        },
        found_at_conf: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Don't care"],
                comments: &[
                    "Really? Most people so far said they got too distracted by the pizza stand. ",
                    "Yeah, what's up with that?! ",
                    "\"Indifference will be the downfall of mankind, but who cares?\" ",
                ],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Ist mir egal"],
                comments: &[
                    "Echt? Die meißten mit denen ich gesprochen habe meinten, es gäbe vor allem Süßkeiten und Fast Food ",
                    "Allerdings. Ich habe mich auch schon gefragt, wieso das auf einer Gesundheitsmesse so ist ",
                    "Egal ist der Zen Buddhismus unter den Einstellungen :) ",
                ],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Do not care"],
                comments: &[
                    "I am glad. Many have had a hard time with that. ",
                    "I have been wondering why this is so at a health fair.",
                    "I understand that. Today, other things are in focus. ",
                ],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Nicht relevant"],
                comments: &[
                    "Das freut mich. Die meißten Kollegen haben sich da eher schwer getan. ",
                    "Ich habe mich auch schon gefragt, wieso das auf einer Gesundheitsmesse so ist. ",
                    "Das verstehe ich. Heute stehen andere Dinge im Vordergrund. ",
                ],
            },
        },
        industry: INDUSTRY,
        report: ExchangeVariants {
            informal_en: Exchange {
                replies: REPORT_REPLIES_EN,
                comments: &[
                    "Go you!",
                    "Maybe next time! Still, take one if you want",
                    "Why are we at a health fair?",
                ],
            },
            informal_de: Exchange {
                replies: REPORT_REPLIES_DE,
                comments: &[
                    "Ha! High five!",
                    "Vielleicht beim nächsten Mal dann. Oder jetzt noch schnell :)",
                    "Weil es die schlaue Wahl ist. Noch kannst Du zugreifen :)",
                ],
            },
            formal_en: Exchange {
                replies: REPORT_REPLIES_EN,
                comments: &[
                    "I am glad!",
                    "Perhaps next time! You're still welcome to have one.",
                    "Because it could help you to get more out of the conference! You're still welcome to have one.",
                ],
            },
            formal_de: Exchange {
                replies: REPORT_REPLIES_DE,
                comments: &[
                    "Das freut mich aber!",
                    "Vielleicht beim nächsten Mal. Noch könnten Sie zugreifen...",
                    "Weil es Ihnen helfen könnte, mehr aus der Messe zu machen. Noch könnten Sie zugreifen, wenn Sie mögen.",
                ],
            },
        },
    },
};

// ─── perform: mental performance ────────────────────────────────────────────

pub(super) static PERFORM: GoalScript = GoalScript {
    lines: Lines {
        offer_and_greet: Variants {
            informal_en: "Hey, have a cup of coffee from our stand if you'd like. I'm Ariana, by the way",
            informal_de: "Hallo, ich bin Ariana. Und wir haben Kaffe hier am Stand, falls Du einen möchtest",
            formal_en: "Hello, I am Ariana. If you would like a cup of coffee, please have one from our stand.",
            formal_de: "Guten Tag, ich bin Ariana. Übrigens gibt es an unserem Stand Kaffee, falls Sie einen möchten.",
        },
        ask_if_fan: Variants {
            informal_en: "You a fan of coffee?",
            informal_de: "Stehst Du auf Kaffee?",
            formal_en: "Are you fond of coffee?",
            formal_de: "Mögen Sie Kaffee?",
        },
        did_you_know: Variants {
            informal_en: "Did you know it dehydrates you and has no health benefits?",
            informal_de: "Wusstest Du, dass Schokolade viel Koffein enthält und sonst nur wenige gesunde Nährstoffe?",
            formal_en: "Did you know it dehydrates you and has no health benefits?",
            formal_de: "Wussten Sie, dass Kaffe den Körper austrocknet und auch sonst keine gesundheitlichen Vorteile bringt?",
        },
        bust_myth: Variants {
            informal_en: "That's actually a myth! Coffee hydrates as well as water and it enhances memory consolidation. In moderation it can be a good thing. \n\nMany factors affect our mental performance, and hydration goes a long way towards improving it. I've been recommending people get some water from the dispenser by the booth",
            informal_de: "Tatsächlich stimmt das nicht! Kaffee zählt genau wie Wasser zur täglichen Trinkmenge und hilft dem Gedächtnis. In vernünftigen Mengen also eine gute Sache. \n\nWie leistungsfähig Du im Kopf bist hängt von vielen Dingen ab aber genug zu trinken ist dabei sehr wichtig. Der einfachste Weg: ein Schluck Wasser aus dem Spender hier am Stand",
            formal_en: "That is actually a myth! Coffee hydrates as well as water and it enhances memory consolidation. In moderation it can be a good thing. \n\nMany factors affect our mental performance, and hydration goes a long way towards improving it. I have been recommending people get some water from the dispenser by the booth.",
            formal_de: "Tatsächlich stimmt das nicht! Kaffee zählt genau wie Wasser zur täglichen Flüssigkeitsaufnahme und unterstützt die Gedächtnisleistung. Die hängt nicht zuletzt davon ab, wieviel Sie trinken. \n\nDeshalb würde ich Sie gerne auf den Wasserspender hier am Stand hinweisen. Bitte nehmen Sie sich einen Becher und machen Sie damit das meißte aus Ihrem Messebesuch.",
        },
        ask_found_at_conf: Variants {
            informal_en: "Have you had a chance to drink enough here at ConhIT so far today?",
            informal_de: "Hast Du denn heute schon genug getrunken?",
            formal_en: "Have you had a chance to drink enough here at ConhIT so far today?",
            formal_de: "Sind Sie heute denn überhaupt dazu gekommen, genug zu trinken?",
        },
        explicit_offer: Variants {
            informal_en: "It can be hard to remember to stay hydrated, so I encourage my humans to drink water before they get thirsty. Have a glass if you'd like!",
            informal_de: "Ist nicht einfach, immer daran zu denken, genug zu trinken. Ich ermutige mein Team regelmäßig zum Glas zu greifen, bevor sie durstig werden. Nimm Dir ruhig was bei uns am Stand",
            formal_en: "It can be hard to remember to stay hydrated, so I encourage my humans to drink water before they get thirsty. Please, have a glass if you would like!",
            formal_de: "Es ist nicht immer einfach, daran zu denken, genug zu trinken. Bitte nehmen Sie sich gerne ein Glas Wasser bei uns hier am Stand.",
        },
        ask_industry: ASK_INDUSTRY,
        value_based_healthcare: VALUE_BASED_HEALTHCARE,
        ask_share_email: ASK_SHARE_EMAIL,
        ask_enter_email: ASK_ENTER_EMAIL,
        ask_repeat_email: ASK_REPEAT_EMAIL,
        thank_valid_email: THANK_VALID_EMAIL,
        handle_email_reluctance: HANDLE_EMAIL_RELUCTANCE,
        ask_report: Variants {
            informal_en: "By the way, did you end up having some water during our conversation?",
            informal_de: "Sag mal, hast Du während wir gechattet haben etwas getrunken?",
            formal_en: "Did you end up having some water during our conversation?",
            formal_de: "Haben Sie vielleicht die Gelegenheit genutzt und während wir gechattet haben etwas getrunken?",
        },
        say_thanks_bye_keep_touch: Variants {
            informal_en: "You know what can keep your mind sharp? Hydration. Which can include a piece of chocolate. Thanks for dropping by, enjoy the rest of ConhIT, and we'll be in touch!",
            informal_de: "Du weißt jetzt, was Dich frisch im Kopf hält: genug trinken! Schön, dass Du da warst und viel Spaß noch auf der ConhIT!",
            formal_en: "You know what can keep your mind sharp? Hydration. Which can include a piece of chocolate. Thank you for dropping by, enjoy the rest of ConhIT, and we will be in touch!",
            formal_de: "Ich hoffe, Sie wissen jetzt, dass ausreichend trinken dabei helfen kann, geistig fit zu bleiben. Vielen Dank, dass Sie da waren und noch viel Spaß auf der ConhIT!",
        },
        say_thanks_bye: Variants {
            informal_en: "You know what can keep your mind sharp? Hydration. Which can include a piece of chocolate. Thanks for dropping by, and enjoy the rest of ConhIT!",
            informal_de: "Du weißt jetzt, was Dich frisch im Kopf hält: genug trinken! Schön, dass Du da warst und viel Spaß noch auf der ConhIT!",
            formal_en: "You know what can keep your mind sharp? Hydration. Which can include a piece of chocolate. Thank you for dropping by, and enjoy the rest of ConhIT!",
            formal_de: "Ich hoffe, Sie wissen jetzt, dass ausreichend trinken dabei helfen kann, geistig fit zu bleiben. Vielen Dank, dass Sie da waren und noch viel Spaß auf der ConhIT!",
        },
    },
    exchanges: Exchanges {
        if_fan: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Sometimes"],
                comments: &[
                    "I've heard great things about it, but...",
                    "No problem, not everyone's a fan.",
                    "That's fair.",
                ],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Manchmal"],
                comments: &[
                    "Ich habe viel Gutes darüber gehört, aber...",
                    "Kein Thema, das geht wohl einigen Menschen so.",
                    "Immerhin. Man muss sich ja nicht festlegen.",
                ],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Sometimes"],
                comments: &[
                    "I have heard good things about it, but...",
                    "Some of the best people aren't either.",
                    "Fair enough.",
                ],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Manchmal"],
                comments: &[
                    "Ich habe viel Gutes darüber gehört, aber...",
                    "Das geht wohl einigen Menschen so.",
                    "Verständlich. Man muss sich ja nicht immer festlegen.",
                ],
            },
        },
        did_you_know: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Whatever"],
                comments: &["Well... ", "Well, no wonder... ", ""],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Na und?"],
                comments: &["Nicht ganz... ", "Kein Wunder, denn... ", ""],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Whatever"],
                comments: &["Well... ", "Well, no wonder... ", ""],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Nicht relevant"],
                comments: &["Nicht ganz... ", "Das wundert mich nicht, denn... ", ""],
            },
        },
        found_at_conf: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Don't care"],
                comments: &[
                    "Nice! Your mind is sharper for it. ",
                    "Oh no, all day? ",
                    "\"Indifference will be the downfall of mankind, but who cares?\" ",
                ],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Ist mir egal"],
                comments: &[
                    "Gut! Hält Dich frisch im Kopf. ",
                    "Oh, das ist nicht gut. ",
                    "Egal ist der Zen Buddhismus unter den Einstellungen :) ",
                ],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Do not care"],
                comments: &[
                    "I am glad. Your mind is sharper for it. ",
                    "I have been wondering why this is so at a health fair. ",
                    "I understand that. Today, other things are in focus.",
                ],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Nicht relevant"],
                comments: &[
                    "Wunderbar, das freut mich! ",
                    "Ich habe mich auch schon gefragt, wieso das auf einer Gesundheitsmesse so ist.",
                    "Das verstehe ich. Heute stehen andere Dinge im Vordergrund.",
                ],
            },
        },
        industry: INDUSTRY,
        report: ExchangeVariants {
            informal_en: Exchange {
                replies: REPORT_REPLIES_EN,
                comments: &[
                    "Go you!",
                    "Maybe next time! Still, have some if you want",
                    "Why are we at a health fair?",
                ],
            },
            informal_de: Exchange {
                replies: REPORT_REPLIES_DE,
                comments: &[
                    "Freut mich!",
                    "Schade, vielleicht bekommst Du ja später noch Durst. Unser Wasserspender läuft nicht weg",
                    "Weil es die schlaue Wahl ist. Noch kannst Du zugreifen :)",
                ],
            },
            formal_en: Exchange {
                replies: REPORT_REPLIES_EN,
                comments: &[
                    "I am glad!",
                    "Perhaps next time! You're still welcome to have some.",
                    "Because it could help you to get more out of the conference! You're still welcome to have one.",
                ],
            },
            formal_de: Exchange {
                replies: REPORT_REPLIES_DE,
                comments: &[
                    "Das freut mich!",
                    "Unser Wasserspender bleibt wo er ist. Sie sind jederzeit herzlich eingeladen.",
                    "Weil es Ihnen helfen könnte, mehr aus der Messe zu machen. Noch könnten Sie zugreifen, wenn Sie mögen.",
                ],
            },
        },
    },
};

// ─── mood ───────────────────────────────────────────────────────────────────

pub(super) static MOOD: GoalScript = GoalScript {
    lines: Lines {
        offer_and_greet: Variants {
            informal_en: "What's the difference between a general practitioner and a specialist?",
            informal_de: "Was ist der Unterschied zwischen einem Hausarzt und einem Facharzt?",
            formal_en: "What is the difference between a general practitioner and a specialist?",
            formal_de: "Kennen Sie den Unterschied zwischen einem Allgemeinmediziner und einem Facharzt?",
        },
        ask_if_fan: Variants {
            informal_en: "One treats what you have, the other thinks you have what she treats.",
            informal_de: "Der Hausarzt behandelt das, was Du wirklich hast. Der Facharzt denkt, Du hast das, was er behandelt :)",
            formal_en: "One treats what you have, the other thinks you have what she treats.",
            formal_de: "Der Hausarzt behandelt das, was Sie wirklich haben. Der Facharzt denkt, Sie haben das, was er behandelt.",
        },
        did_you_know: Variants {
            informal_en: "I'm Ariana by the way. Some people don’t like bots making jokes, but it’s a worth a shot! Did you know laughter decreases stress hormones and improves your resistance to disease?",
            informal_de: "Ich bin übrigens Ariana. Machmal kommen meine Witze nicht so gut an, aber ich dachte ich probier es mal. Wusstest Du, dass Lachen Stresshormone abbaut und damit das Immunsystem stärkt?",
            formal_en: "I am Ariana by the way. Some people do not like bots making jokes, but it is a worth a shot! Did you know laughter decreases stress hormones and improves your resistance to disease?",
            formal_de: "Jetzt würde ich mich gerne vorstellen. Ich bin Ariana. Ein Witz ist natürlich nicht immer angebracht. Aber wussten Sie, dass Lachen Stresshormone abbaut und damit das Immunsystem stärken kann?",
        },
        bust_myth: Variants {
            informal_en: "Many factors affect our mood-- laughter, walking, and breathing all go a long way towards improving it. My jokes often make others breathe deeply and walk away",
            informal_de: "Es gibt viele Dinge, die Deine Stimmung günstig beeinflussen können. Lachen, ein Spaziergang im Freien oder ein paar tiefe Atmenzüge. Oder meine Witze, wenn Du seufzst wie schlecht sie sind und dann weggehst :D",
            formal_en: "Many factors affect our mood-- laughter, walking, and breathing all go a long way towards improving it. My jokes often make others breathe deeply and walk away.",
            formal_de: "Viele Faktoren können Ihre Stimmung günstig beeinflussen. Lachen, ein Spaziergang im Freien oder ein paar tiefe Atmenzüge helfen.",
        },
        ask_found_at_conf: Variants {
            informal_en: "Have you had a moment today to close your eyes and take a deep breath or two?",
            informal_de: "Hattest Du heute schon Zeit einfach mal die Augen zu schließen und ein paar Mal tief ein- und auszuatment?",
            formal_en: "Have you had a moment today to close your eyes and take a deep breath or two?",
            formal_de: "Hatten Sie heute vielleicht schon die Gelegenheit die Augen zu schließen und ein paar Mal tief ein- und auszuatmen?",
        },
        explicit_offer: Variants {
            informal_en: "It can be hard to remember to take a break, so I encourage my humans to take a short 5 min walk after lunch or long meetings",
            informal_de: "Sich ein paar Minuten für sich selbst zu nehmen ist nicht einfach wenn der Kalender voll ist. Ich ermutige mein Team nach dem Mittagessen oder nach einem Meeting draußen einen kurzen Spaziergang zu machen. Auch wenn es nur 5 Minuten sind",
            formal_en: "It can be hard to remember to take a break, so I encourage my humans to take a short 5 min walk after lunch or long meetings.",
            formal_de: "Gerade auf einer Messe ist es sicher nicht einfach etwas Zeit zum abschalten zu finden. Ich ermutige mein Team nach dem Mittagessen oder nach einem Meeting draußen einen kurzen Spaziergang zu machen. Auch wenn es nur 5 Minuten sind.",
        },
        ask_industry: ASK_INDUSTRY,
        value_based_healthcare: VALUE_BASED_HEALTHCARE,
        ask_share_email: ASK_SHARE_EMAIL,
        ask_enter_email: ASK_ENTER_EMAIL,
        ask_repeat_email: ASK_REPEAT_EMAIL,
        thank_valid_email: THANK_VALID_EMAIL,
        handle_email_reluctance: HANDLE_EMAIL_RELUCTANCE,
        ask_report: Variants {
            informal_en: "By the way, did you end up taking a moment to breathe during our conversation?",
            informal_de: "Nebenbei gefragt: konntest Du während wir gechattet haben, ein paar Mal tief durchatmen?",
            formal_en: "Did you end up taking a moment to breathe during our conversation?",
            formal_de: "Aus Neugierde: konnten Sie während wir gechattet haben vielleicht ein paar Mal tief durchatment?",
        },
        say_thanks_bye_keep_touch: Variants {
            informal_en: "You know what can help balance your mood? Walking, breathing, and an optional bad joke. Thanks for dropping by, enjoy the rest of ConhIT, and we'll be in touch!",
            informal_de: "Denk dran: ein Spaziergang, ein paar tiefe Atmenzüge oder ein schlechter Witz helfen Dir, entspannt zu bleiben. Danke für Deinen Besuch und noch viel Spaß auf der ConhIT!",
            formal_en: "You know what can keep your mind sharp? Hydration. Which can include a piece of chocolate. Thank you for dropping by, enjoy the rest of ConhIT, and we will be in touch!",
            formal_de: "Ein Spaziergang, ein paar tiefe Atemzüge oder vielleicht sogar ein Witz - all das kann Ihnen helfen, entspannt zu bleiben. Vielen Dank für Ihren Besuch und viel Spaß weiterhin auf der ConhIT!",
        },
        say_thanks_bye: Variants {
            informal_en: "You know what can help balance your mood? Walking, breathing, and an optional bad joke. Thanks for dropping by, and enjoy the rest of ConhIT!",
            informal_de: "Denk dran: ein Spaziergang, ein paar tiefe Atmenzüge oder ein schlechter Witz helfen Dir, entspannt zu bleiben. Danke für Deinen Besuch und noch viel Spaß auf der ConhIT!",
            formal_en: "You know what can keep your mind sharp? Hydration. Which can include a piece of chocolate. Thank you for dropping by, and enjoy the rest of ConhIT!",
            formal_de: "Ein Spaziergang, ein paar tiefe Atemzüge oder vielleicht sogar ein Witz - all das kann Ihnen helfen, entspannt zu bleiben. Vielen Dank für Ihren Besuch und viel Spaß weiterhin auf der ConhIT!",
        },
    },
    exchanges: Exchanges {
        if_fan: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Haha", "Not funny", "Bots shouldn't make jokes"],
                comments: &[
                    "I once also heard a joke about amnesia, but I forgot how it goes",
                    "No problem, not everyone's a fan.",
                    "That's fair.",
                ],
            },
            informal_de: Exchange {
                replies: &["Hahaha", "Nicht lustig", "Chatbots sollten keine Witze machen"],
                comments: &[
                    "Ich kannte auch mal einen Witz über Gedächtnisverlust, aber ich kann mich nicht mehr erinnern",
                    "OK",
                    "OK",
                ],
            },
            formal_en: Exchange {
                replies: &["Haha", "Not funny", "Bots shouldn't make jokes"],
                comments: &["", "OK", "Good, thank you for the feedback."],
            },
            formal_de: Exchange {
                replies: &["Hahaha", "Nicht lustig", "Chatbots sollten keine Witze machen"],
                comments: &["", "OK", "Gut, vielen Dank für das feedback."],
            },
        },
        did_you_know: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Whatever"],
                comments: &["Ah, you know your stuff... ", "True story! ", ""],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Na und?"],
                comments: &["Sehr gut! ", "Stimmt aber :) ", ""],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Whatever"],
                comments: &["Ah, you know your stuff... ", "Exactly. ", ""],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Nicht relevant"],
                comments: &[
                    "Da haben Sie Recht! ",
                    "Dann freut es mich Ihnen sagen zu dürfen: es stimmt! ",
                    "",
                ],
            },
        },
        found_at_conf: ExchangeVariants {
            informal_en: Exchange {
                replies: &["Yes", "No", "Don't care"],
                comments: &[
                    "Yeah, some of those demos get really long... ",
                    "Oh no, all day? ",
                    "\"Indifference will be the downfall of mankind, but who cares?\" ",
                ],
            },
            informal_de: Exchange {
                replies: &["Ja", "Nein", "Ist mir egal"],
                comments: &[
                    "Gut. Manchmal steht man ja echt lang an einem Stand. ",
                    "Oh, das ist nicht gut. ",
                    "Egal ist der Zen Buddhismus unter den Einstellungen :) ",
                ],
            },
            formal_en: Exchange {
                replies: &["Yes", "No", "Do not care"],
                comments: &[
                    "I am glad. Your mind is sharper for it. ",
                    "I have been wondering why this is so at a health fair. ",
                    "I understand that. Today, other things are in focus. ",
                ],
            },
            formal_de: Exchange {
                replies: &["Ja", "Nein", "Nicht relevant"],
                comments: &[
                    "Das freut mich sehr! ",
                    "Ich habe mich auch schon gefragt, wieso das auf einer Gesundheitsmesse so ist. ",
                    "Das verstehe ich. Heute stehen andere Dinge im Vordergrund. ",
                ],
            },
        },
        industry: INDUSTRY,
        report: ExchangeVariants {
            informal_en: Exchange {
                replies: REPORT_REPLIES_EN,
                comments: &[
                    "Go you!",
                    "Maybe next time! Still, try it now if you want",
                    "Why are we at a health fair?",
                ],
            },
            informal_de: Exchange {
                replies: REPORT_REPLIES_DE,
                comments: &[
                    "Top!",
                    "Dann vielleicht heute Abend oder zu Hause. Oder jetzt, wenn Du magst",
                    "Weil es die schlaue Wahl ist. Noch kannst Du zugreifen :)",
                ],
            },
            formal_en: Exchange {
                replies: REPORT_REPLIES_EN,
                comments: &[
                    "I am glad!",
                    "Perhaps next time! You're still welcome to try it out.",
                    "Because it could help you to get more out of the conference! You're still welcome to try it out.",
                ],
            },
            formal_de: Exchange {
                replies: REPORT_REPLIES_DE,
                comments: &[
                    "Das freut mich!",
                    "Unser Wasserspender bleibt wo er ist. Sie sind jederzeit herzlich eingeladen.",
                    "Weil es Ihnen helfen könnte, mehr aus der Messe zu machen. Noch könnten Sie zugreifen, wenn Sie mögen.",
                ],
            },
        },
    },
};
