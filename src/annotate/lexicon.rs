//! Word lists and lexical classification for the built-in English tagger.
//!
//! Classification looks a lowercase word up in closed-class tables, then in
//! the open-class lexicons (with inflection stripping and a Snowball stem
//! fallback), then applies suffix rules. Context is resolved later by the
//! tagger.

use std::collections::{HashMap, HashSet};

use rust_stemmers::{Algorithm, Stemmer};

use super::doc::Pos;

/// Verb inflection as far as it can be told from the word alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    Base,
    ThirdPerson,
    Gerund,
    /// Irregular simple past ("went").
    Past,
    /// Irregular past participle ("gone").
    Participle,
    /// Regular "-ed" forms and irregulars shared by past and participle ("made").
    PastOrParticiple,
}

/// Lexical class of a single word, before context is considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lex {
    Fixed(Pos, &'static str),
    Be(&'static str),
    Have(&'static str),
    Do(&'static str),
    Modal,
    To,
    That,
    Her,
    ApostropheS,
    Like,
    Honorific,
    Verb { lemma: String, form: Form },
    Adj { tag: &'static str, lemma: String },
    Adv,
    Noun { tag: &'static str, lemma: String },
    Number,
}

const CLOSED: &[(&str, Pos, &str)] = &[
    ("the", Pos::Det, "DT"),
    ("a", Pos::Det, "DT"),
    ("an", Pos::Det, "DT"),
    ("this", Pos::Det, "DT"),
    ("these", Pos::Det, "DT"),
    ("those", Pos::Det, "DT"),
    ("every", Pos::Det, "DT"),
    ("each", Pos::Det, "DT"),
    ("either", Pos::Det, "DT"),
    ("neither", Pos::Det, "DT"),
    ("another", Pos::Det, "DT"),
    ("no", Pos::Det, "DT"),
    ("some", Pos::Det, "DT"),
    ("any", Pos::Det, "DT"),
    ("all", Pos::Det, "DT"),
    ("both", Pos::Det, "DT"),
    ("my", Pos::Pron, "PRP$"),
    ("your", Pos::Pron, "PRP$"),
    ("his", Pos::Pron, "PRP$"),
    ("its", Pos::Pron, "PRP$"),
    ("our", Pos::Pron, "PRP$"),
    ("their", Pos::Pron, "PRP$"),
    ("thy", Pos::Pron, "PRP$"),
    ("i", Pos::Pron, "PRP"),
    ("you", Pos::Pron, "PRP"),
    ("he", Pos::Pron, "PRP"),
    ("she", Pos::Pron, "PRP"),
    ("it", Pos::Pron, "PRP"),
    ("we", Pos::Pron, "PRP"),
    ("they", Pos::Pron, "PRP"),
    ("me", Pos::Pron, "PRP"),
    ("him", Pos::Pron, "PRP"),
    ("us", Pos::Pron, "PRP"),
    ("them", Pos::Pron, "PRP"),
    ("thou", Pos::Pron, "PRP"),
    ("thee", Pos::Pron, "PRP"),
    ("myself", Pos::Pron, "PRP"),
    ("yourself", Pos::Pron, "PRP"),
    ("himself", Pos::Pron, "PRP"),
    ("herself", Pos::Pron, "PRP"),
    ("itself", Pos::Pron, "PRP"),
    ("ourselves", Pos::Pron, "PRP"),
    ("themselves", Pos::Pron, "PRP"),
    ("mine", Pos::Pron, "PRP"),
    ("yours", Pos::Pron, "PRP"),
    ("hers", Pos::Pron, "PRP"),
    ("ours", Pos::Pron, "PRP"),
    ("theirs", Pos::Pron, "PRP"),
    ("someone", Pos::Pron, "NN"),
    ("somebody", Pos::Pron, "NN"),
    ("something", Pos::Pron, "NN"),
    ("anyone", Pos::Pron, "NN"),
    ("anybody", Pos::Pron, "NN"),
    ("anything", Pos::Pron, "NN"),
    ("everyone", Pos::Pron, "NN"),
    ("everybody", Pos::Pron, "NN"),
    ("everything", Pos::Pron, "NN"),
    ("nothing", Pos::Pron, "NN"),
    ("nobody", Pos::Pron, "NN"),
    ("who", Pos::Pron, "WP"),
    ("whom", Pos::Pron, "WP"),
    ("what", Pos::Pron, "WP"),
    ("whose", Pos::Pron, "WP$"),
    ("which", Pos::Pron, "WDT"),
    ("there", Pos::Pron, "EX"),
    ("of", Pos::Adp, "IN"),
    ("in", Pos::Adp, "IN"),
    ("on", Pos::Adp, "IN"),
    ("at", Pos::Adp, "IN"),
    ("by", Pos::Adp, "IN"),
    ("for", Pos::Adp, "IN"),
    ("with", Pos::Adp, "IN"),
    ("about", Pos::Adp, "IN"),
    ("against", Pos::Adp, "IN"),
    ("between", Pos::Adp, "IN"),
    ("into", Pos::Adp, "IN"),
    ("through", Pos::Adp, "IN"),
    ("during", Pos::Adp, "IN"),
    ("before", Pos::Adp, "IN"),
    ("after", Pos::Adp, "IN"),
    ("above", Pos::Adp, "IN"),
    ("below", Pos::Adp, "IN"),
    ("from", Pos::Adp, "IN"),
    ("over", Pos::Adp, "IN"),
    ("under", Pos::Adp, "IN"),
    ("upon", Pos::Adp, "IN"),
    ("within", Pos::Adp, "IN"),
    ("without", Pos::Adp, "IN"),
    ("toward", Pos::Adp, "IN"),
    ("towards", Pos::Adp, "IN"),
    ("across", Pos::Adp, "IN"),
    ("behind", Pos::Adp, "IN"),
    ("beyond", Pos::Adp, "IN"),
    ("near", Pos::Adp, "IN"),
    ("among", Pos::Adp, "IN"),
    ("along", Pos::Adp, "IN"),
    ("around", Pos::Adp, "IN"),
    ("than", Pos::Adp, "IN"),
    ("since", Pos::Adp, "IN"),
    ("until", Pos::Adp, "IN"),
    ("till", Pos::Adp, "IN"),
    ("off", Pos::Adp, "IN"),
    ("beside", Pos::Adp, "IN"),
    ("besides", Pos::Adp, "IN"),
    ("throughout", Pos::Adp, "IN"),
    ("and", Pos::Cconj, "CC"),
    ("or", Pos::Cconj, "CC"),
    ("but", Pos::Cconj, "CC"),
    ("nor", Pos::Cconj, "CC"),
    ("if", Pos::Sconj, "IN"),
    ("because", Pos::Sconj, "IN"),
    ("although", Pos::Sconj, "IN"),
    ("though", Pos::Sconj, "IN"),
    ("while", Pos::Sconj, "IN"),
    ("whether", Pos::Sconj, "IN"),
    ("unless", Pos::Sconj, "IN"),
    ("as", Pos::Sconj, "IN"),
    ("when", Pos::Adv, "WRB"),
    ("where", Pos::Adv, "WRB"),
    ("how", Pos::Adv, "WRB"),
    ("why", Pos::Adv, "WRB"),
    ("not", Pos::Part, "RB"),
    ("n't", Pos::Part, "RB"),
    ("n’t", Pos::Part, "RB"),
    ("more", Pos::Adv, "RBR"),
    ("most", Pos::Adv, "RBS"),
    ("less", Pos::Adv, "RBR"),
    ("least", Pos::Adv, "RBS"),
    ("better", Pos::Adj, "JJR"),
    ("best", Pos::Adj, "JJS"),
    ("worse", Pos::Adj, "JJR"),
    ("worst", Pos::Adj, "JJS"),
    ("elder", Pos::Adj, "JJR"),
    ("eldest", Pos::Adj, "JJS"),
    ("oh", Pos::Intj, "UH"),
    ("ah", Pos::Intj, "UH"),
    ("alas", Pos::Intj, "UH"),
    ("hello", Pos::Intj, "UH"),
    ("hey", Pos::Intj, "UH"),
    ("yes", Pos::Intj, "UH"),
    ("ha", Pos::Intj, "UH"),
    ("one", Pos::Num, "CD"),
    ("two", Pos::Num, "CD"),
    ("three", Pos::Num, "CD"),
    ("four", Pos::Num, "CD"),
    ("five", Pos::Num, "CD"),
    ("six", Pos::Num, "CD"),
    ("seven", Pos::Num, "CD"),
    ("eight", Pos::Num, "CD"),
    ("nine", Pos::Num, "CD"),
    ("ten", Pos::Num, "CD"),
    ("eleven", Pos::Num, "CD"),
    ("twelve", Pos::Num, "CD"),
    ("twenty", Pos::Num, "CD"),
    ("thirty", Pos::Num, "CD"),
    ("forty", Pos::Num, "CD"),
    ("fifty", Pos::Num, "CD"),
    ("hundred", Pos::Num, "CD"),
    ("thousand", Pos::Num, "CD"),
    ("million", Pos::Num, "CD"),
];

const BE: &[(&str, &str)] = &[
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("'re", "VBP"),
    ("’re", "VBP"),
    ("'m", "VBP"),
    ("’m", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
];

const HAVE: &[(&str, &str)] = &[
    ("have", "VBP"),
    ("'ve", "VBP"),
    ("’ve", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
];

const DO: &[(&str, &str)] = &[("do", "VBP"), ("does", "VBZ"), ("did", "VBD")];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must", "ca", "wo",
    "'ll", "’ll", "'d", "’d",
];

pub(crate) const HONORIFICS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "mme.", "mlle.", "prince", "princess", "count", "countess",
    "madame", "monsieur", "mademoiselle", "sir", "lord", "lady", "baron", "baroness",
];

pub(crate) const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "mme", "mlle", "jr", "sr", "vs", "etc", "prof", "gen", "col",
    "capt", "lt", "rev",
];

pub(crate) const SPEECH_VERBS: &[&str] = &[
    "said", "says", "asked", "replied", "answered", "cried", "exclaimed", "whispered", "shouted",
    "continued", "added", "remarked", "muttered",
];

const VERBS: &[&str] = &[
    "accept", "add", "admire", "admit", "agree", "allow", "answer", "appear", "approach", "argue",
    "arrive", "ask", "attack", "avoid", "bear", "beat", "become", "beg", "begin", "believe",
    "belong", "bend", "bite", "blame", "bless", "blush", "boil", "borrow", "bow", "break",
    "breathe", "bring", "build", "burn", "buy", "call", "carry", "catch", "cause", "change",
    "choose", "climb", "close", "come", "complain", "consider", "continue", "cook", "cough",
    "count", "cover", "cry", "cut", "dance", "dare", "deal", "decide", "declare", "defend",
    "deny", "depend", "describe", "deserve", "die", "dig", "disappear", "discover", "dream",
    "dress", "drink", "drive", "drop", "eat", "enjoy", "enter", "escape", "exclaim", "expect",
    "explain", "fall", "fear", "feed", "feel", "fight", "fill", "find", "finish", "fit", "fly",
    "follow", "forget", "forgive", "gather", "get", "give", "glance", "go", "greet", "grow",
    "guess", "hang", "happen", "hate", "hear", "help", "hide", "hit", "hold", "hope", "hunt",
    "hurry", "hurt", "imagine", "insist", "interrupt", "invite", "join", "jump", "keep", "kick",
    "kill", "kiss", "kneel", "knock", "know", "laugh", "lay", "lead", "lean", "learn", "leave",
    "lend", "let", "lie", "lift", "listen", "live", "look", "lose", "love", "make", "march",
    "marry", "mean", "meet", "mention", "mind", "miss", "move", "murmur", "need", "nod",
    "notice", "obey", "offer", "open", "order", "owe", "own", "pass", "pay", "pick", "play",
    "please", "point", "pour", "pray", "prefer", "prepare", "pretend", "promise", "protect",
    "prove", "pull", "push", "put", "raise", "reach", "read", "realize", "receive",
    "recognize", "refuse", "rejoice", "rely", "remain", "remember", "repeat", "reply", "rest",
    "return", "ride", "ring", "rise", "run", "rush", "save", "say", "search", "see", "seek",
    "seem", "seize", "sell", "send", "serve", "set", "shake", "shine", "shoot", "shout", "show",
    "shut", "sigh", "sing", "sink", "sit", "sleep", "smile", "smoke", "speak", "spend",
    "spread", "stand", "stare", "start", "stay", "steal", "step", "stop", "stretch", "strike",
    "study", "succeed", "suffer", "suppose", "swear", "swim", "take", "talk", "teach", "tear",
    "tell", "thank", "think", "throw", "tie", "touch", "travel", "tremble", "trust", "try",
    "turn", "understand", "use", "visit", "wait", "wake", "walk", "wander", "want", "warn",
    "wash", "watch", "wear", "weep", "whisper", "win", "wipe", "wish", "wonder", "work",
    "worry", "write", "yield",
];

/// Irregular forms: (form, base, inflection).
const IRREGULAR: &[(&str, &str, Form)] = &[
    ("went", "go", Form::Past),
    ("gone", "go", Form::Participle),
    ("goes", "go", Form::ThirdPerson),
    ("came", "come", Form::Past),
    ("saw", "see", Form::Past),
    ("seen", "see", Form::Participle),
    ("took", "take", Form::Past),
    ("taken", "take", Form::Participle),
    ("gave", "give", Form::Past),
    ("given", "give", Form::Participle),
    ("knew", "know", Form::Past),
    ("known", "know", Form::Participle),
    ("began", "begin", Form::Past),
    ("begun", "begin", Form::Participle),
    ("became", "become", Form::Past),
    ("ran", "run", Form::Past),
    ("rose", "rise", Form::Past),
    ("risen", "rise", Form::Participle),
    ("spoke", "speak", Form::Past),
    ("spoken", "speak", Form::Participle),
    ("wrote", "write", Form::Past),
    ("written", "write", Form::Participle),
    ("ate", "eat", Form::Past),
    ("eaten", "eat", Form::Participle),
    ("drank", "drink", Form::Past),
    ("drunk", "drink", Form::Participle),
    ("drove", "drive", Form::Past),
    ("driven", "drive", Form::Participle),
    ("fell", "fall", Form::Past),
    ("fallen", "fall", Form::Participle),
    ("flew", "fly", Form::Past),
    ("flown", "fly", Form::Participle),
    ("forgot", "forget", Form::Past),
    ("forgotten", "forget", Form::Participle),
    ("forgave", "forgive", Form::Past),
    ("forgiven", "forgive", Form::Participle),
    ("grew", "grow", Form::Past),
    ("grown", "grow", Form::Participle),
    ("hid", "hide", Form::Past),
    ("hidden", "hide", Form::Participle),
    ("rode", "ride", Form::Past),
    ("ridden", "ride", Form::Participle),
    ("rang", "ring", Form::Past),
    ("sang", "sing", Form::Past),
    ("sung", "sing", Form::Participle),
    ("sank", "sink", Form::Past),
    ("shook", "shake", Form::Past),
    ("shaken", "shake", Form::Participle),
    ("stole", "steal", Form::Past),
    ("stolen", "steal", Form::Participle),
    ("swam", "swim", Form::Past),
    ("swore", "swear", Form::Past),
    ("sworn", "swear", Form::Participle),
    ("threw", "throw", Form::Past),
    ("thrown", "throw", Form::Participle),
    ("tore", "tear", Form::Past),
    ("torn", "tear", Form::Participle),
    ("woke", "wake", Form::Past),
    ("woken", "wake", Form::Participle),
    ("wore", "wear", Form::Past),
    ("worn", "wear", Form::Participle),
    ("broke", "break", Form::Past),
    ("broken", "break", Form::Participle),
    ("chose", "choose", Form::Past),
    ("chosen", "choose", Form::Participle),
    ("drew", "draw", Form::Past),
    ("drawn", "draw", Form::Participle),
    ("bore", "bear", Form::Past),
    ("born", "bear", Form::Participle),
    ("made", "make", Form::PastOrParticiple),
    ("said", "say", Form::PastOrParticiple),
    ("told", "tell", Form::PastOrParticiple),
    ("found", "find", Form::PastOrParticiple),
    ("felt", "feel", Form::PastOrParticiple),
    ("left", "leave", Form::PastOrParticiple),
    ("brought", "bring", Form::PastOrParticiple),
    ("thought", "think", Form::PastOrParticiple),
    ("held", "hold", Form::PastOrParticiple),
    ("heard", "hear", Form::PastOrParticiple),
    ("kept", "keep", Form::PastOrParticiple),
    ("meant", "mean", Form::PastOrParticiple),
    ("met", "meet", Form::PastOrParticiple),
    ("paid", "pay", Form::PastOrParticiple),
    ("sent", "send", Form::PastOrParticiple),
    ("slept", "sleep", Form::PastOrParticiple),
    ("spent", "spend", Form::PastOrParticiple),
    ("taught", "teach", Form::PastOrParticiple),
    ("understood", "understand", Form::PastOrParticiple),
    ("wept", "weep", Form::PastOrParticiple),
    ("won", "win", Form::PastOrParticiple),
    ("got", "get", Form::PastOrParticiple),
    ("lost", "lose", Form::PastOrParticiple),
    ("led", "lead", Form::PastOrParticiple),
    ("sought", "seek", Form::PastOrParticiple),
    ("sold", "sell", Form::PastOrParticiple),
    ("caught", "catch", Form::PastOrParticiple),
    ("built", "build", Form::PastOrParticiple),
    ("bought", "buy", Form::PastOrParticiple),
    ("stood", "stand", Form::PastOrParticiple),
    ("sat", "sit", Form::PastOrParticiple),
    ("laid", "lay", Form::PastOrParticiple),
    ("lent", "lend", Form::PastOrParticiple),
    ("hung", "hang", Form::PastOrParticiple),
    ("fought", "fight", Form::PastOrParticiple),
    ("knelt", "kneel", Form::PastOrParticiple),
    ("fed", "feed", Form::PastOrParticiple),
];

const ADJECTIVES: &[&str] = &[
    "afraid", "alive", "angry", "ashamed", "awful", "bad", "beautiful", "big", "bitter", "black",
    "blind", "blue", "bold", "brave", "bright", "broad", "brown", "busy", "calm", "certain",
    "cheap", "clean", "clear", "clever", "cold", "cool", "cruel", "curious", "dark", "dead",
    "deaf", "dear", "deep", "different", "difficult", "dirty", "dry", "dull", "eager", "early",
    "easy", "elderly", "empty", "entire", "extraordinary", "fair", "faint", "false", "familiar",
    "famous", "far", "fat", "fierce", "fine", "firm", "flat", "fond", "foolish", "foreign",
    "frank", "free", "fresh", "friendly", "full", "gay", "gentle", "glad", "golden", "good",
    "grand", "grave", "gray", "great", "green", "grey", "guilty", "handsome", "happy", "hard",
    "heavy", "high", "holy", "honest", "hot", "huge", "ill", "important", "impossible", "keen",
    "kind", "large", "last", "late", "lazy", "little", "lonely", "long", "loud", "lovely", "low",
    "mad", "merry", "mere", "mild", "naked", "narrow", "natural", "neat", "necessary", "new",
    "nice", "noble", "odd", "old", "ordinary", "other", "own", "pale", "particular", "perfect",
    "plain", "pleasant", "polite", "poor", "possible", "pretty", "private", "proper", "proud",
    "public", "pure", "quick", "quiet", "rapid", "rare", "ready", "real", "red", "rich", "rough",
    "rude", "sad", "sacred", "same", "severe", "sharp", "short", "shy", "sick", "silent", "silly",
    "simple", "slow", "small", "smooth", "soft", "solemn", "special", "stern", "stiff", "strange",
    "strong", "stupid", "sudden", "sure", "sweet", "swift", "tall", "tender", "terrible", "thick",
    "thin", "tight", "tiny", "tired", "total", "true", "ugly", "usual", "vague", "vain", "vast",
    "warm", "weak", "weary", "wet", "white", "whole", "wicked", "wide", "wild", "wise", "worthy",
    "wrong", "yellow", "young",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "only", "even", "still", "never", "always", "often", "again",
    "now", "then", "here", "so", "quite", "rather", "almost", "already", "soon", "ever",
    "perhaps", "indeed", "however", "yet", "once", "away", "back", "up", "down", "out",
    "together", "twice", "else", "thus", "sometimes", "tomorrow", "today", "yesterday", "forward",
    "much", "well", "enough",
];

const NOUN_EXCEPTIONS: &[&str] = &[
    "family", "belly", "lily", "jelly", "ally", "folly", "holly", "thing", "king", "morning",
    "evening", "wedding", "ceiling", "string", "wing", "darling", "pudding", "bed", "hundred",
    "kindred", "sled", "shed", "breed", "speed", "seed", "deed", "weed", "creed", "news",
];

const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ic",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ism", "ance", "ence", "hood", "dom", "ist",
];

pub(crate) struct Lexicon {
    closed: HashMap<&'static str, (Pos, &'static str)>,
    be: HashMap<&'static str, &'static str>,
    have: HashMap<&'static str, &'static str>,
    did: HashMap<&'static str, &'static str>,
    modals: HashSet<&'static str>,
    honorifics: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    verb_stems: HashMap<String, &'static str>,
    irregular: HashMap<&'static str, (&'static str, Form)>,
    adjectives: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    noun_exceptions: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Lexicon {
    pub(crate) fn english() -> Lexicon {
        let stemmer = Stemmer::create(Algorithm::English);
        let verb_stems = VERBS
            .iter()
            .map(|&v| (stemmer.stem(v).into_owned(), v))
            .collect();
        Lexicon {
            closed: CLOSED.iter().map(|&(w, p, t)| (w, (p, t))).collect(),
            be: BE.iter().copied().collect(),
            have: HAVE.iter().copied().collect(),
            did: DO.iter().copied().collect(),
            modals: MODALS.iter().copied().collect(),
            honorifics: HONORIFICS.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            verb_stems,
            irregular: IRREGULAR.iter().map(|&(w, b, f)| (w, (b, f))).collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            noun_exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            stemmer,
        }
    }

    pub(crate) fn is_honorific(&self, word: &str) -> bool {
        self.honorifics.contains(word)
    }

    pub(crate) fn is_verb_base(&self, word: &str) -> bool {
        self.verbs.contains(word)
    }

    /// Classifies a lowercase word.
    pub(crate) fn classify(&self, word: &str) -> Lex {
        match word {
            "to" => return Lex::To,
            "that" => return Lex::That,
            "her" => return Lex::Her,
            "'s" | "’s" => return Lex::ApostropheS,
            "like" => return Lex::Like,
            _ => {}
        }
        if self.honorifics.contains(word) {
            return Lex::Honorific;
        }
        if let Some(&tag) = self.be.get(word) {
            return Lex::Be(tag);
        }
        if let Some(&tag) = self.have.get(word) {
            return Lex::Have(tag);
        }
        if let Some(&tag) = self.did.get(word) {
            return Lex::Do(tag);
        }
        if self.modals.contains(word) {
            return Lex::Modal;
        }
        if let Some(&(pos, tag)) = self.closed.get(word) {
            return Lex::Fixed(pos, tag);
        }
        if let Some(&(base, form)) = self.irregular.get(word) {
            return verb(base, form);
        }
        if self.adjectives.contains(word) {
            return adj("JJ", word);
        }
        if self.verbs.contains(word) {
            return verb(word, Form::Base);
        }
        if self.adverbs.contains(word) {
            return Lex::Adv;
        }
        if self.noun_exceptions.contains(word) {
            return noun("NN", word);
        }
        if is_number(word) {
            return Lex::Number;
        }
        self.classify_by_form(word)
    }

    fn classify_by_form(&self, word: &str) -> Lex {
        let len = word.chars().count();
        if let Some(base) = self.adjective_degree(word, "est") {
            return adj("JJS", base);
        }
        if let Some(base) = self.adjective_degree(word, "er") {
            return adj("JJR", base);
        }
        if len > 4 && word.ends_with("ly") {
            return Lex::Adv;
        }
        if word.ends_with('s') {
            if let Some(base) = self.verb_base(word, "s") {
                return verb(base, Form::ThirdPerson);
            }
        }
        if len > 4 && word.ends_with("ing") {
            let lemma = self.verb_base(word, "ing").unwrap_or(word);
            return verb(lemma, Form::Gerund);
        }
        if len > 4 && word.ends_with("ed") && !word.ends_with("eed") {
            let lemma = self.verb_base(word, "ed").unwrap_or(word);
            return verb(lemma, Form::PastOrParticiple);
        }
        if len > 4 && ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return adj("JJ", word);
        }
        if len > 4 && NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return noun("NN", word);
        }
        if len > 3
            && word.ends_with('s')
            && !["ss", "us", "is"].iter().any(|s| word.ends_with(s))
        {
            return noun("NNS", &singular(word));
        }
        noun("NN", word)
    }

    /// Base verb of an inflected form, by suffix stripping and then by stem.
    fn verb_base(&self, word: &str, suffix: &str) -> Option<&'static str> {
        let stem = word.strip_suffix(suffix)?;
        let mut candidates = vec![stem.to_string()];
        match suffix {
            "s" => {
                if let Some(s) = word.strip_suffix("ies") {
                    candidates.push(format!("{s}y"));
                }
                if let Some(s) = word.strip_suffix("es") {
                    candidates.push(s.to_string());
                }
            }
            "ing" => {
                candidates.push(format!("{stem}e"));
                if let Some(s) = stem.strip_suffix('y') {
                    candidates.push(format!("{s}ie"));
                }
                candidates.extend(undouble(stem));
            }
            "ed" => {
                candidates.push(format!("{stem}e"));
                if let Some(s) = word.strip_suffix("ied") {
                    candidates.push(format!("{s}y"));
                }
                candidates.extend(undouble(stem));
            }
            _ => {}
        }
        if let Some(base) = candidates
            .iter()
            .find_map(|c| self.verbs.get(c.as_str()).copied())
        {
            return Some(base);
        }
        self.verb_stems.get(self.stemmer.stem(word).as_ref()).copied()
    }

    fn adjective_degree(&self, word: &str, suffix: &str) -> Option<&'static str> {
        let stem = word.strip_suffix(suffix)?;
        let mut candidates = vec![stem.to_string(), format!("{stem}e")];
        if let Some(s) = stem.strip_suffix('i') {
            candidates.push(format!("{s}y"));
        }
        candidates.extend(undouble(stem));
        candidates
            .iter()
            .find_map(|c| self.adjectives.get(c.as_str()).copied())
    }
}

fn verb(lemma: &str, form: Form) -> Lex {
    Lex::Verb {
        lemma: lemma.to_string(),
        form,
    }
}

fn adj(tag: &'static str, lemma: &str) -> Lex {
    Lex::Adj {
        tag,
        lemma: lemma.to_string(),
    }
}

fn noun(tag: &'static str, lemma: &str) -> Lex {
    Lex::Noun {
        tag,
        lemma: lemma.to_string(),
    }
}

/// "stopp" -> "stop"
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !"aeiou".contains(last)).then(|| {
        let mut s = stem.to_string();
        s.pop();
        s
    })
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

pub(crate) fn singular(word: &str) -> String {
    if let Some(s) = word.strip_suffix("ies") {
        return format!("{s}y");
    }
    for suffix in ["ches", "shes", "sses", "xes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_classes() {
        let lex = Lexicon::english();
        assert_eq!(lex.classify("the"), Lex::Fixed(Pos::Det, "DT"));
        assert_eq!(lex.classify("was"), Lex::Be("VBD"));
        assert_eq!(lex.classify("could"), Lex::Modal);
        assert_eq!(lex.classify("mr."), Lex::Honorific);
    }

    #[test]
    fn verb_inflections_resolve_to_base() {
        let lex = Lexicon::english();
        assert_eq!(lex.classify("jumps"), verb("jump", Form::ThirdPerson));
        assert_eq!(lex.classify("cries"), verb("cry", Form::ThirdPerson));
        assert_eq!(lex.classify("running"), verb("run", Form::Gerund));
        assert_eq!(lex.classify("making"), verb("make", Form::Gerund));
        assert_eq!(lex.classify("stopped"), verb("stop", Form::PastOrParticiple));
        assert_eq!(lex.classify("loved"), verb("love", Form::PastOrParticiple));
        assert_eq!(lex.classify("went"), verb("go", Form::Past));
    }

    #[test]
    fn adjectives_and_degrees() {
        let lex = Lexicon::english();
        assert_eq!(lex.classify("quick"), adj("JJ", "quick"));
        assert_eq!(lex.classify("biggest"), adj("JJS", "big"));
        assert_eq!(lex.classify("happier"), adj("JJR", "happy"));
        assert_eq!(lex.classify("dangerous"), adj("JJ", "dangerous"));
    }

    #[test]
    fn nouns_by_suffix_and_default() {
        let lex = Lexicon::english();
        assert_eq!(lex.classify("fox"), noun("NN", "fox"));
        assert_eq!(lex.classify("happiness"), noun("NN", "happiness"));
        assert_eq!(lex.classify("houses"), noun("NNS", "house"));
        assert_eq!(lex.classify("family"), noun("NN", "family"));
        assert_eq!(lex.classify("morning"), noun("NN", "morning"));
        assert_eq!(lex.classify("1812"), Lex::Number);
    }

    #[test]
    fn singular_forms() {
        assert_eq!(singular("ladies"), "lady");
        assert_eq!(singular("churches"), "church");
        assert_eq!(singular("dogs"), "dog");
    }
}
