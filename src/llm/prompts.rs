// Prompt for single-shot structured extraction from a legal case document

pub const EXTRACTION_PROMPT: &str = r#"Analise o documento legal em anexo e extraia as seguintes informações no formato JSON.
- Se uma informação não for encontrada, retorne uma string vazia ("") para o campo correspondente.
- Para os campos de valores monetários (valorImpugnado, danosMorais, danosMateriais, repeticaoIndebito), siga estas regras de formatação rigorosamente:
  1. Localize o valor no formato de moeda brasileira (ex: "R$ 17.740,59").
  2. Remova o símbolo "R$", espaços e os pontos (.) que são separadores de milhar. O exemplo se torna "17740,59".
  3. Troque a vírgula (,) por um ponto (.). O exemplo se torna "17740.59".
  4. O resultado final deve ser uma string contendo apenas o número formatado desta maneira. Não faça nenhuma outra interpretação ou cálculo.
  5. Se o valor estiver escrito por extenso (ex: "dezessete mil e quarenta reais e cinquenta e nove centavos"), converta-o para o formato numérico "17040.59".
- Opine sobre o tipo de prova mais adequado ('oral' ou 'pericial') e forneça uma justificativa concisa baseada nos fatos do documento."#;
