//! The built-in TOPIK 1 vocabulary
//!
//! Words are grouped by the song that teaches them. Every word carries one
//! example sentence drawn from that song's vocabulary set.

use super::model::PartOfSpeech::{Adjective, Adverb, Noun};
use super::model::{Example, PartOfSpeech, Word};

fn word(
    id: &str,
    hangul: &str,
    meanings: &[&str],
    romanization: &str,
    part_of_speech: PartOfSpeech,
    difficulty: u8,
    example: (&str, &str, &str),
) -> Word {
    Word {
        id: id.into(),
        hangul: hangul.into(),
        meanings: meanings.iter().map(|m| (*m).into()).collect(),
        romanization: romanization.into(),
        part_of_speech,
        difficulty,
        example: Example {
            hangul: example.0.into(),
            translation: example.1.into(),
            song_id: example.2.into(),
        },
    }
}

/// The full word list, in catalog order
pub fn words() -> Vec<Word> {
    const DYNAMITE: &str = "bts-dynamite";
    const HYLT: &str = "blackpink-hylt";
    const BLUEMING: &str = "iu-blueming";
    const HYPE_BOY: &str = "newjeans-hypeboy";
    const GODS_MENU: &str = "straykids-godsmenu";

    vec![
        // BTS - Dynamite (15 words)
        word("w1", "학교", &["school"], "hakgyo", Noun, 1, ("학교에서 만나요", "See you at school", DYNAMITE)),
        word("w2", "친구", &["friend"], "chingu", Noun, 1, ("친구와 함께", "Together with a friend", DYNAMITE)),
        word("w3", "음식", &["food", "dish"], "eumsik", Noun, 1, ("맛있는 음식", "Delicious food", DYNAMITE)),
        word("w4", "좋다", &["good", "to be liked"], "jota", Adjective, 1, ("기분이 좋다", "I feel good", DYNAMITE)),
        word("w5", "크다", &["big"], "keuda", Adjective, 1, ("큰 꿈을 꿔요", "I dream a big dream", DYNAMITE)),
        word("w6", "작다", &["small"], "jakda", Adjective, 1, ("작은 것부터", "Starting from the small things", DYNAMITE)),
        word("w7", "날씨", &["weather"], "nalssi", Noun, 1, ("오늘 날씨가 좋아요", "The weather is nice today", DYNAMITE)),
        word("w8", "시간", &["time"], "sigan", Noun, 1, ("시간이 없어요", "There is no time", DYNAMITE)),
        word("w9", "사람", &["person", "people"], "saram", Noun, 1, ("좋은 사람", "A good person", DYNAMITE)),
        word("w10", "이름", &["name"], "ireum", Noun, 1, ("이름이 뭐예요?", "What is your name?", DYNAMITE)),
        word("w11", "나라", &["country"], "nara", Noun, 2, ("우리 나라", "Our country", DYNAMITE)),
        word("w12", "도시", &["city"], "dosi", Noun, 2, ("큰 도시", "A big city", DYNAMITE)),
        word("w13", "집", &["house", "home"], "jip", Noun, 1, ("집에 가요", "I am going home", DYNAMITE)),
        word("w14", "방", &["room"], "bang", Noun, 1, ("내 방에서", "In my room", DYNAMITE)),
        word("w15", "문", &["door"], "mun", Noun, 1, ("문을 열어요", "I open the door", DYNAMITE)),
        // BLACKPINK - How You Like That (12 words)
        word("w16", "여자", &["woman", "girl"], "yeoja", Noun, 1, ("강한 여자", "A strong woman", HYLT)),
        word("w17", "남자", &["man", "guy"], "namja", Noun, 1, ("그 남자", "That guy", HYLT)),
        word("w18", "사랑", &["love"], "sarang", Noun, 1, ("사랑해요", "I love you", HYLT)),
        word("w19", "예쁘다", &["pretty"], "yeppeuda", Adjective, 1, ("정말 예쁘다", "Really pretty", HYLT)),
        word("w20", "강하다", &["strong"], "ganghada", Adjective, 2, ("더 강하게", "Even stronger", HYLT)),
        word("w21", "약하다", &["weak"], "yakhada", Adjective, 2, ("약한 마음", "A weak heart", HYLT)),
        word("w22", "높다", &["high", "tall"], "nopda", Adjective, 2, ("높이 올라가", "Climbing up high", HYLT)),
        word("w23", "낮다", &["low"], "natda", Adjective, 2, ("낮은 곳에서", "In a low place", HYLT)),
        word("w24", "빨간", &["red"], "ppalgan", Adjective, 2, ("빨간 입술", "Red lips", HYLT)),
        word("w25", "파란", &["blue"], "paran", Adjective, 2, ("파란 하늘", "A blue sky", HYLT)),
        word("w26", "노란", &["yellow"], "noran", Adjective, 2, ("노란 꽃", "A yellow flower", HYLT)),
        word("w27", "검은", &["black"], "geomeun", Adjective, 2, ("검은 머리", "Black hair", HYLT)),
        // IU - Blueming (10 words)
        word("w28", "꽃", &["flower"], "kkot", Noun, 1, ("예쁜 꽃", "A pretty flower", BLUEMING)),
        word("w29", "나무", &["tree"], "namu", Noun, 1, ("큰 나무 아래", "Under a big tree", BLUEMING)),
        word("w30", "물", &["water"], "mul", Noun, 1, ("물이 흐른다", "The water flows", BLUEMING)),
        word("w31", "불", &["fire", "light"], "bul", Noun, 1, ("불을 켜요", "I turn on the light", BLUEMING)),
        word("w32", "바람", &["wind"], "baram", Noun, 1, ("바람이 불어요", "The wind is blowing", BLUEMING)),
        word("w33", "하늘", &["sky"], "haneul", Noun, 1, ("푸른 하늘", "The blue sky", BLUEMING)),
        word("w34", "땅", &["ground", "earth"], "ttang", Noun, 1, ("땅 위에", "On the ground", BLUEMING)),
        word("w35", "별", &["star"], "byeol", Noun, 1, ("별이 빛나요", "A star is shining", BLUEMING)),
        word("w36", "달", &["moon", "month"], "dal", Noun, 1, ("달빛 아래", "Under the moonlight", BLUEMING)),
        word("w37", "구름", &["cloud"], "gureum", Noun, 1, ("하얀 구름", "A white cloud", BLUEMING)),
        // NewJeans - Hype Boy (12 words)
        word("w38", "손", &["hand"], "son", Noun, 1, ("손을 잡아", "Take my hand", HYPE_BOY)),
        word("w39", "발", &["foot"], "bal", Noun, 1, ("발이 아파요", "My foot hurts", HYPE_BOY)),
        word("w40", "머리", &["head", "hair"], "meori", Noun, 1, ("머리가 길어요", "The hair is long", HYPE_BOY)),
        word("w41", "얼굴", &["face"], "eolgul", Noun, 1, ("예쁜 얼굴", "A pretty face", HYPE_BOY)),
        word("w42", "눈", &["eye", "snow"], "nun", Noun, 1, ("눈이 커요", "The eyes are big", HYPE_BOY)),
        word("w43", "코", &["nose"], "ko", Noun, 1, ("작은 코", "A small nose", HYPE_BOY)),
        word("w44", "입", &["mouth", "lips"], "ip", Noun, 1, ("입을 열어", "Open your mouth", HYPE_BOY)),
        word("w45", "귀", &["ear"], "gwi", Noun, 1, ("귀에 들린다", "I hear it", HYPE_BOY)),
        word("w46", "몸", &["body"], "mom", Noun, 1, ("몸이 좋아요", "In good shape", HYPE_BOY)),
        word("w47", "마음", &["heart", "mind"], "maeum", Noun, 1, ("내 마음", "My heart", HYPE_BOY)),
        word("w48", "생각", &["thought", "idea"], "saenggak", Noun, 2, ("좋은 생각", "A good idea", HYPE_BOY)),
        word("w49", "꿈", &["dream"], "kkum", Noun, 1, ("꿈을 꿔요", "I am dreaming", HYPE_BOY)),
        // Stray Kids - God's Menu (14 words)
        word("w50", "아침", &["morning", "breakfast"], "achim", Noun, 1, ("아침에 일어나요", "I get up in the morning", GODS_MENU)),
        word("w51", "점심", &["lunch", "noon"], "jeomsim", Noun, 1, ("점심 먹었어요?", "Did you have lunch?", GODS_MENU)),
        word("w52", "저녁", &["evening", "dinner"], "jeonyeok", Noun, 1, ("저녁에 만나요", "See you in the evening", GODS_MENU)),
        word("w53", "밤", &["night"], "bam", Noun, 1, ("밤이 깊어요", "The night is deep", GODS_MENU)),
        word("w54", "오늘", &["today"], "oneul", Adverb, 1, ("오늘 뭐 해요?", "What are you doing today?", GODS_MENU)),
        word("w55", "내일", &["tomorrow"], "naeil", Adverb, 1, ("내일 봐요", "See you tomorrow", GODS_MENU)),
        word("w56", "어제", &["yesterday"], "eoje", Adverb, 1, ("어제 뭐 했어요?", "What did you do yesterday?", GODS_MENU)),
        word("w57", "주", &["week"], "ju", Noun, 2, ("이번 주", "This week", GODS_MENU)),
        word("w58", "월", &["month"], "wol", Noun, 2, ("다음 월", "Next month", GODS_MENU)),
        word("w59", "년", &["year"], "nyeon", Noun, 2, ("새해", "The new year", GODS_MENU)),
        word("w60", "때", &["time", "moment"], "ttae", Noun, 2, ("그때", "At that time", GODS_MENU)),
        word("w61", "지금", &["now"], "jigeum", Adverb, 1, ("지금 시작해", "Start now", GODS_MENU)),
        word("w62", "처음", &["beginning", "first time"], "cheoeum", Noun, 2, ("처음부터", "From the very beginning", GODS_MENU)),
        word("w63", "마지막", &["last", "end"], "majimak", Noun, 2, ("마지막까지", "Until the very end", GODS_MENU)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn word_list_has_sixty_three_entries() {
        assert_eq!(words().len(), 63);
    }

    #[test]
    fn word_ids_are_unique() {
        let list = words();
        let ids: HashSet<&str> = list.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn every_word_has_a_meaning_and_example() {
        for w in words() {
            assert!(!w.meanings.is_empty(), "{} has no meanings", w.id);
            assert!(!w.example.hangul.is_empty(), "{} has no example", w.id);
            assert!(!w.example.song_id.is_empty(), "{} has no song", w.id);
        }
    }

    #[test]
    fn difficulty_stays_in_tier_range() {
        for w in words() {
            assert!((1..=3).contains(&w.difficulty), "{} tier {}", w.id, w.difficulty);
        }
    }
}
