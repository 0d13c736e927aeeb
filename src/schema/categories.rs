//! Fixed category catalogue
//!
//! Eight life-domains, compiled into the program and never persisted.

use serde::Serialize;

/// One of the eight fixed categories
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub guidance: &'static str,
    pub examples: [&'static str; 3],
}

pub static CATEGORIES: [Category; 8] = [
    Category {
        id: 1,
        title: "空間の使い方",
        description: "あなたの空間を最も占めているものは何？",
        guidance: "自宅の自分のスペース（部屋、書斎等）や仕事場において置いているもの、飾っているもの、何に関連するものが多いか、特に目につくものを3つ挙げます。パソコンやスマートフォンがある人は、その中にあるアプリやウェブサイトを挙げてください。",
        examples: ["本棚に並ぶビジネス書", "デスクの上のカメラ機材", "壁に飾られた家族の写真"],
    },
    Category {
        id: 2,
        title: "時間の使い方",
        description: "あなたが最も時間を費やしている活動は何？",
        guidance: "あなたが最も時間を費やしていることは何？3つ挙げてみましょう。手帳やカレンダーで実際に確認してみましょう。",
        examples: ["読書で知識を得ること", "家族との時間", "仕事のプロジェクト"],
    },
    Category {
        id: 3,
        title: "エネルギーの注ぎ方",
        description: "あなたが最もエネルギーを注いでいるものは何？",
        guidance: "何をしているとき、活力が溢れてきますか？あなたが夢中になって取り組めること、また、それをする前よりする後の方が元気になるようなことを3つ挙げましょう。",
        examples: ["新しい技術の学習", "チームでの問題解決", "創作活動"],
    },
    Category {
        id: 4,
        title: "お金の使い方",
        description: "あなたが最もお金を使っていることは何？",
        guidance: "あなたが最もお金を使って買っているモノ、サービス、または情報は何？実際に自分が3ヶ月の間に使ったお金を思い出し、3つ書き出してみましょう。",
        examples: ["オンライン学習コース", "健康食品・サプリメント", "旅行・体験"],
    },
    Category {
        id: 5,
        title: "思考の傾向",
        description: "あなたが最もよく想像し、実現化しているものは何？",
        guidance: "あなたが最もよく想像している、人生で実現したいこと（なりたい状態、したいこと、手に入れたい物）は何？また、実現化している、実現に近づいていることは何？3つ挙げましょう。",
        examples: ["独立して自分のビジネスを持つ", "海外で働く経験", "専門性を高める"],
    },
    Category {
        id: 6,
        title: "コミュニケーション",
        description: "あなたがよく他人に話しかける話題は何？",
        guidance: "他人と話をするとき、どんな話題を持ちかけますか？または、SNSやブログで発信していることは何？相手と話したい、長時間話し続けていても楽しいことは何？3つ挙げましょう。",
        examples: ["最新のテクノロジー", "子育ての工夫", "趣味のアウトドア"],
    },
    Category {
        id: 7,
        title: "学習の方向性",
        description: "あなたが最も学びたい、知りたいことは何？",
        guidance: "あなたが最も知りたいこと、より深く学びたいこと、興味を抱いていることは何？よくネットで検索すること、書店でよく行くコーナーなどを考えながら3つ挙げましょう。",
        examples: ["AI・機械学習", "心理学", "投資・資産運用"],
    },
    Category {
        id: 8,
        title: "自己管理",
        description: "あなたが最も律することができているもの、整理整頓できているものは何？",
        guidance: "あなたが日常生活で、最も自分を制し、律することができていることは何？または、整理整頓できている場所、事柄は何？3つ挙げてみましょう。",
        examples: ["毎朝のランニング習慣", "デスク周りの整理", "タスク管理"],
    },
];

/// Look up a category by id (1..=8)
pub fn category(id: u32) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_ids_are_sequential() {
        let ids: Vec<u32> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(category(2).unwrap().title, "時間の使い方");
        assert_eq!(category(8).unwrap().examples.len(), 3);
        assert!(category(0).is_none());
        assert!(category(9).is_none());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&CATEGORIES[0]).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"examples\":[\"本棚に並ぶビジネス書\""));
    }
}
