//! 개인정보 마스킹 유틸리티

/// 이름의 마지막 글자를 `*`로 가립니다.
///
/// 글자 수는 유니코드 문자(code point) 기준이며 결과 길이는 원본과 같습니다.
///
/// ```rust,ignore
/// assert_eq!(mask_name("홍길동"), "홍길*");
/// assert_eq!(mask_name("홍"), "*");
/// ```
pub fn mask_name(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    if let Some(last) = chars.last_mut() {
        *last = '*';
    }
    chars.into_iter().collect()
}
