//! Demo aggregate with all 24 slots answered and seven groups
//!
//! Used by the `sample` command and as a fixture in tests.

use crate::schema::{now_millis, Answer, Group, UserData, ANSWERS_PER_CATEGORY};

/// (category, index, text, purpose, group id)
const ANSWERS: [(u32, u32, &str, Option<&str>, &str); 24] = [
    (1, 1, "会社のデスク周りの整理整頓された書類", None, "group-work"),
    (1, 2, "自宅のテーブルにある資格試験のテキスト", Some("今のスキルのままでは将来が不安で、何か手に職をつけたいから"), "group-prep"),
    (1, 3, "部屋の隅にある癒やしの観葉植物", None, "group-healing"),
    (2, 1, "会社での事務作業と調整業務", None, "group-work"),
    (2, 2, "寝る前のSNSチェックと将来に関する検索", Some("周りの友人の生活が気になったり、自分のキャリアの正解を探してしまうため"), "group-anxiety"),
    (2, 3, "週末の作り置きと家事", None, "group-life"),
    (3, 1, "職場での人間関係への気配り", None, "group-connect"),
    (3, 2, "ミスなく業務を遂行すること", Some("評価を下げたくない、安定した立場を失いたくないという思いがあるため"), "group-work"),
    (3, 3, "週末の友人とのお茶でのストレス発散", None, "group-healing"),
    (4, 1, "毎月の積立NISAとiDeCo", None, "group-prep"),
    (4, 2, "美容院や化粧品などの身だしなみ", Some("社会人として最低限のマナーを保ちつつ、少しでも自信を持ちたいため"), "group-life"),
    (4, 3, "たまの自分へのご褒美（スイーツやランチ）", None, "group-healing"),
    (5, 1, "「このまま会社にいていいのか」という漠然とした不安", None, "group-anxiety"),
    (5, 2, "結婚や出産とキャリアの両立への焦り", Some("年齢的なリミットや、ロールモデルが近くにいないことで悩んでいるため"), "group-anxiety"),
    (5, 3, "副業や転職で環境を変えるシミュレーション", None, "group-growth"),
    (6, 1, "職場の同僚との業務連絡やランチでの会話", None, "group-work"),
    (6, 2, "学生時代の友人との近況報告会", Some("お互いのライフステージの変化を確認し、自分だけが取り残されていないか安心したいため"), "group-connect"),
    (6, 3, "実家の親への定期的な連絡", None, "group-connect"),
    (7, 1, "TOEICや英語学習", None, "group-growth"),
    (7, 2, "簿記やFPなどのお金の知識", Some("会社の給料だけに頼らず、自分で資産を守れるようになりたいため"), "group-prep"),
    (7, 3, "転職サイトやキャリア形成の記事", None, "group-growth"),
    (8, 1, "毎日のスキンケアとサプリメント", None, "group-life"),
    (8, 2, "自炊による食費と健康の管理", Some("将来のために少しでも貯金をしつつ、体調を崩さないようにするため"), "group-life"),
    (8, 3, "手帳でのスケジュールとTo Do管理", None, "group-life"),
];

/// (id, label, color)
const GROUPS: [(&str, &str, &str); 7] = [
    ("group-prep", "将来への備え", "hsl(120, 70%, 60%)"),
    ("group-work", "職場での役割遂行", "hsl(240, 70%, 60%)"),
    ("group-healing", "心の安定・リフレッシュ", "hsl(320, 70%, 60%)"),
    ("group-connect", "他者との繋がり", "hsl(180, 70%, 60%)"),
    ("group-anxiety", "現状への不安・焦り", "hsl(280, 70%, 60%)"),
    ("group-growth", "自己成長・キャリア", "hsl(0, 70%, 60%)"),
    ("group-life", "生活規律・健康", "hsl(30, 70%, 60%)"),
];

/// Build the demo aggregate, stamped with the current time
pub fn sample_data() -> UserData {
    let answers: Vec<Answer> = ANSWERS
        .iter()
        .map(|&(category, index, text, purpose, group_id)| Answer {
            id: (category - 1) * ANSWERS_PER_CATEGORY + index,
            category,
            index,
            text: text.to_string(),
            purpose: purpose.map(str::to_string),
            group_id: Some(group_id.to_string()),
        })
        .collect();

    let groups = GROUPS
        .iter()
        .map(|&(id, label, color)| Group {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            answer_ids: answers
                .iter()
                .filter(|a| a.group_id.as_deref() == Some(id))
                .map(|a| a.id)
                .collect(),
        })
        .collect();

    UserData {
        answers,
        groups,
        insights: Vec::new(),
        timestamp: now_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::answer_id;

    #[test]
    fn test_sample_covers_every_slot() {
        let data = sample_data();
        assert_eq!(data.answers.len(), 24);
        for answer in &data.answers {
            assert_eq!(answer.id, answer_id(answer.category, answer.index).unwrap());
            assert_eq!(answer.purpose.is_some(), answer.index == 2);
        }
    }

    #[test]
    fn test_sample_groups_consistent() {
        let data = sample_data();
        assert_eq!(data.groups.len(), 7);
        assert!(data.insights.is_empty());

        let work = data.group("group-work").unwrap();
        assert_eq!(work.answer_ids, vec![1, 4, 8, 16]);
        let life = data.group("group-life").unwrap();
        assert_eq!(life.answer_ids, vec![6, 11, 22, 23, 24]);

        for answer in &data.answers {
            let group = data.group_of(answer).unwrap();
            assert!(group.contains(answer.id));
        }
    }
}
