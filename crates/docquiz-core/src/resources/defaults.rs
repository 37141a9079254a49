//! Bundled English defaults written by `LinguisticResources::install_defaults`.

/// English stopwords (lowercase).
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Word → Penn Treebank tag for frequent non-noun open-class words.
/// Closed-class words are mostly stopwords and never reach the tagger.
pub const LEXICON: &[(&str, &str)] = &[
    // Verbs, past tense
    ("began", "VBD"), ("became", "VBD"), ("came", "VBD"), ("gave", "VBD"), ("went", "VBD"),
    ("took", "VBD"), ("made", "VBD"), ("said", "VBD"), ("told", "VBD"), ("found", "VBD"),
    ("knew", "VBD"), ("thought", "VBD"), ("brought", "VBD"), ("built", "VBD"), ("led", "VBD"),
    ("left", "VBD"), ("felt", "VBD"), ("held", "VBD"), ("kept", "VBD"), ("meant", "VBD"),
    ("met", "VBD"), ("ran", "VBD"), ("saw", "VBD"), ("sent", "VBD"), ("spent", "VBD"),
    ("stood", "VBD"), ("won", "VBD"), ("wrote", "VBD"), ("grew", "VBD"), ("rose", "VBD"),
    ("fell", "VBD"), ("drew", "VBD"), ("chose", "VBD"), ("lost", "VBD"), ("paid", "VBD"),
    // Verbs, participles
    ("known", "VBN"), ("given", "VBN"), ("taken", "VBN"), ("shown", "VBN"), ("seen", "VBN"),
    ("written", "VBN"), ("grown", "VBN"), ("chosen", "VBN"), ("drawn", "VBN"), ("done", "VBN"),
    ("gone", "VBN"), ("begun", "VBN"), ("born", "VBN"),
    // Verbs, base / present
    ("make", "VB"), ("makes", "VBZ"), ("take", "VB"), ("takes", "VBZ"), ("give", "VB"),
    ("gives", "VBZ"), ("get", "VB"), ("gets", "VBZ"), ("go", "VB"), ("goes", "VBZ"),
    ("know", "VB"), ("knows", "VBZ"), ("see", "VB"), ("sees", "VBZ"), ("come", "VB"),
    ("comes", "VBZ"), ("think", "VB"), ("thinks", "VBZ"), ("use", "VB"), ("uses", "VBZ"),
    ("find", "VB"), ("finds", "VBZ"), ("tell", "VB"), ("tells", "VBZ"), ("become", "VB"),
    ("becomes", "VBZ"), ("show", "VB"), ("shows", "VBZ"), ("include", "VB"),
    ("includes", "VBZ"), ("provide", "VB"), ("provides", "VBZ"), ("allow", "VB"),
    ("allows", "VBZ"), ("require", "VB"), ("requires", "VBZ"), ("contain", "VB"),
    ("contains", "VBZ"), ("describe", "VB"), ("describes", "VBZ"), ("explain", "VB"),
    ("explains", "VBZ"), ("help", "VB"), ("helps", "VBZ"), ("keep", "VB"), ("keeps", "VBZ"),
    ("let", "VB"), ("lets", "VBZ"), ("seem", "VB"), ("seems", "VBZ"), ("may", "MD"),
    ("might", "MD"), ("must", "MD"), ("could", "MD"), ("would", "MD"), ("shall", "MD"),
    // Adjectives
    ("famous", "JJ"), ("new", "JJ"), ("old", "JJ"), ("good", "JJ"), ("great", "JJ"),
    ("large", "JJ"), ("small", "JJ"), ("big", "JJ"), ("little", "JJ"), ("high", "JJ"),
    ("low", "JJ"), ("long", "JJ"), ("short", "JJ"), ("early", "JJ"), ("late", "JJ"),
    ("major", "JJ"), ("minor", "JJ"), ("many", "JJ"), ("several", "JJ"), ("different", "JJ"),
    ("important", "JJ"), ("main", "JJ"), ("common", "JJ"), ("simple", "JJ"), ("real", "JJ"),
    ("true", "JJ"), ("whole", "JJ"), ("best", "JJS"), ("better", "JJR"), ("first", "JJ"),
    ("last", "JJ"), ("next", "JJ"), ("certain", "JJ"), ("possible", "JJ"), ("likely", "JJ"),
    ("similar", "JJ"), ("general", "JJ"), ("specific", "JJ"), ("human", "JJ"),
    ("public", "JJ"), ("free", "JJ"), ("full", "JJ"), ("open", "JJ"), ("due", "JJ"),
    // Adverbs
    ("however", "RB"), ("often", "RB"), ("well", "RB"), ("still", "RB"), ("even", "RB"),
    ("already", "RB"), ("always", "RB"), ("never", "RB"), ("sometimes", "RB"),
    ("usually", "RB"), ("almost", "RB"), ("also", "RB"), ("yet", "RB"), ("thus", "RB"),
    ("therefore", "RB"), ("together", "RB"), ("instead", "RB"), ("perhaps", "RB"),
    ("later", "RB"), ("soon", "RB"), ("ago", "RB"),
    // Nouns the -ing suffix rule would tag as gerunds
    ("planning", "NN"), ("building", "NN"), ("meeting", "NN"), ("training", "NN"),
    ("funding", "NN"), ("housing", "NN"), ("learning", "NN"), ("morning", "NN"),
    ("evening", "NN"), ("painting", "NN"), ("clothing", "NN"), ("feeling", "NN"),
    ("thing", "NN"), ("string", "NN"), ("spring", "NN"), ("ceiling", "NN"), ("setting", "NN"),
    ("opening", "NN"), ("beginning", "NN"), ("understanding", "NN"), ("wedding", "NN"),
    ("warning", "NN"), ("engineering", "NN"),
    // Prepositions and conjunctions outside the stopword list
    ("within", "IN"), ("without", "IN"), ("among", "IN"), ("upon", "IN"), ("across", "IN"),
    ("although", "IN"), ("though", "IN"), ("since", "IN"), ("unless", "IN"), ("whether", "IN"),
    ("yes", "UH"),
];

/// Abbreviations (lowercase, without the trailing dot) that do not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "e.g", "i.e",
    "cf", "al", "approx", "dept", "est", "fig", "figs", "no", "nos", "vol", "vols", "inc",
    "ltd", "co", "corp", "gen", "col", "lt", "sgt", "capt", "rev", "gov", "sen", "rep", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s",
    "u.k", "a.m", "p.m", "ph.d", "eq", "ch", "sec", "pp", "ed", "eds",
];
